//! Particle backdrop driver
//!
//! Owns the field, the canvas surface and a `requestAnimationFrame` chain.
//! A single persistent closure is reused for every frame; it is released on
//! unmount together with the resize listener.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::canvas::CanvasSurface;
use super::dom::{self, EventListener};
use crate::config::FieldConfig;
use crate::error::{Result, SiteError};
use crate::field::ParticleField;
use crate::frame::FrameLoop;
use crate::renderer::{FieldStyle, Surface, draw_field};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Backdrop {
    field: ParticleField,
    surface: CanvasSurface,
    style: FieldStyle,
    frame: FrameLoop,
}

impl Backdrop {
    fn resize(&mut self, width: f64, height: f64) {
        self.surface.set_size(width as u32, height as u32);
        self.field.resize(width as f32, height as f32);
    }
}

/// Mounted particle backdrop. Dropping it unmounts.
pub struct ParticleBackground {
    /// None when the canvas has no 2D context (blank backdrop)
    state: Option<Rc<RefCell<Backdrop>>>,
    callback: FrameCallback,
    _resize: Option<EventListener>,
}

impl ParticleBackground {
    /// Attach to `<canvas id=canvas_id>` sized to the viewport and start
    /// animating
    pub fn mount(canvas_id: &str, config: &FieldConfig, seed: u64) -> Result<Self> {
        let window = dom::window()?;
        let canvas: HtmlCanvasElement = dom::element_by_id(canvas_id)?
            .dyn_into()
            .map_err(|_| SiteError::MissingElement(canvas_id.to_string()))?;

        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let Some(mut surface) = CanvasSurface::new(canvas) else {
            log::warn!("No 2D context on #{}; background disabled", canvas_id);
            return Ok(Self {
                state: None,
                callback,
                _resize: None,
            });
        };

        let (width, height) = dom::viewport_size(&window);
        surface.set_size(width as u32, height as u32);
        let field = ParticleField::new(width as f32, height as f32, config, seed);
        log::info!(
            "Background mounted: {} particles on {}x{}",
            field.particles().len(),
            width,
            height
        );

        let state = Rc::new(RefCell::new(Backdrop {
            field,
            surface,
            style: FieldStyle::from_config(config),
            frame: FrameLoop::new(),
        }));

        // Frame callback: step, draw, reschedule
        {
            let state = state.clone();
            let reschedule = callback.clone();
            *callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
                {
                    let mut b = state.borrow_mut();
                    if !b.frame.begin_frame() {
                        return;
                    }
                    let Backdrop {
                        field,
                        surface,
                        style,
                        ..
                    } = &mut *b;
                    field.step();
                    draw_field(surface, field, style);
                }
                request_frame(&state, &reschedule);
            }));
        }

        let resize = {
            let state = state.clone();
            EventListener::new(&window, "resize", move |_| {
                let Ok(window) = dom::window() else { return };
                let (width, height) = dom::viewport_size(&window);
                state.borrow_mut().resize(width, height);
            })?
        };

        request_frame(&state, &callback);

        Ok(Self {
            state: Some(state),
            callback,
            _resize: Some(resize),
        })
    }
}

/// Ask for the next animation frame, if the loop allows one
fn request_frame(state: &Rc<RefCell<Backdrop>>, callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut b = state.borrow_mut();
    if !b.frame.can_schedule() {
        return;
    }
    let callback = callback.borrow();
    let Some(closure) = callback.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(handle) => {
            if !b.frame.scheduled(handle) {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        if let Some(state) = &self.state {
            let mut b = state.borrow_mut();
            if let Some(handle) = b.frame.stop() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
            log::info!("Background unmounted after {} frames", b.frame.frames());
        }
        // Breaks the closure -> callback cell cycle
        self.callback.borrow_mut().take();
    }
}
