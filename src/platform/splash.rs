//! Loading screen binding
//!
//! Advances the progress bar on an interval, then hides the splash after
//! the finish delay and hands over to the site. The interval and timeout
//! are owned by the view and cleared when it is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::{Element, HtmlElement};

use super::dom::{self, Interval, Timeout};
use crate::config::SplashConfig;
use crate::error::Result;
use crate::splash::{SplashProgress, SplashTick};

const SPLASH_ID: &str = "splash";
const BAR_ID: &str = "splash-bar";
const SITE_ID: &str = "site";

struct SplashState {
    progress: SplashProgress,
    splash: Element,
    bar: Option<HtmlElement>,
    finish_delay_ms: i32,
    interval: Option<Interval>,
    finish: Option<Timeout>,
    on_finish: Option<Box<dyn FnOnce()>>,
}

pub struct SplashView {
    state: Rc<RefCell<SplashState>>,
}

impl SplashView {
    /// Show the splash; `on_finish` runs once the bar has filled and the
    /// finish delay has passed
    pub fn show<F>(config: &SplashConfig, on_finish: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let splash = dom::element_by_id(SPLASH_ID)?;
        dom::set_hidden(&splash, false);
        let bar = dom::html_element_by_id(BAR_ID).ok();

        let state = Rc::new(RefCell::new(SplashState {
            progress: SplashProgress::new(config),
            splash,
            bar,
            finish_delay_ms: config.finish_delay_ms,
            interval: None,
            finish: None,
            on_finish: Some(Box::new(on_finish)),
        }));

        let weak = Rc::downgrade(&state);
        let interval = Interval::new(config.interval_ms, move || tick(&weak))?;
        state.borrow_mut().interval = Some(interval);

        log::info!("Splash shown");
        Ok(Self { state })
    }
}

fn tick(weak: &Weak<RefCell<SplashState>>) {
    let Some(state) = weak.upgrade() else { return };
    let mut s = state.borrow_mut();
    match s.progress.tick() {
        SplashTick::Advanced(percent) => {
            if let Some(bar) = &s.bar {
                let _ = bar.style().set_property("width", &format!("{percent}%"));
            }
        }
        SplashTick::Completed => {
            s.interval = None;
            let weak = weak.clone();
            match Timeout::new(s.finish_delay_ms, move || finish(&weak)) {
                Ok(timeout) => s.finish = Some(timeout),
                Err(e) => {
                    log::warn!("Splash finish timer failed: {e}; finishing now");
                    drop(s);
                    finish(&Rc::downgrade(&state));
                }
            }
        }
        SplashTick::Idle => {}
    }
}

fn finish(weak: &Weak<RefCell<SplashState>>) {
    let Some(state) = weak.upgrade() else { return };
    let on_finish = {
        let mut s = state.borrow_mut();
        dom::set_hidden(&s.splash, true);
        match dom::element_by_id(SITE_ID) {
            Ok(site) => dom::set_hidden(&site, false),
            Err(e) => log::warn!("{e}"),
        }
        s.on_finish.take()
    };
    log::info!("Splash finished");
    if let Some(f) = on_finish {
        f();
    }
}

impl Drop for SplashView {
    fn drop(&mut self) {
        let mut s = self.state.borrow_mut();
        s.interval = None;
        s.finish = None;
    }
}
