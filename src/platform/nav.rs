//! Navigation bar binding
//!
//! Builds nav buttons from config, highlights the active section on
//! scroll, smooth-scrolls on click and drives the mobile overlay.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::dom::{self, EventListener};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::sections::{Boundary, Navigation, Section, SectionTracker, Span};

/// Desktop links container
const NAV_LINKS_ID: &str = "nav-links";
/// Mobile overlay container
const MOBILE_MENU_ID: &str = "mobile-menu";
const MENU_TOGGLE_ID: &str = "menu-toggle";

impl Boundary for HtmlElement {
    fn span(&self) -> Option<Span> {
        if !self.is_connected() {
            return None;
        }
        Some(Span::new(self.offset_top() as f64, self.offset_height() as f64))
    }
}

struct NavState {
    tracker: SectionTracker<HtmlElement>,
    nav: Navigation,
    /// Desktop buttons with their target section id
    buttons: Vec<(String, Element)>,
    mobile_menu: Option<Element>,
}

impl NavState {
    fn highlight(&self) {
        let active = self.tracker.active_id();
        for (target, button) in &self.buttons {
            let _ = button
                .class_list()
                .toggle_with_force("active", active == Some(target.as_str()));
        }
    }

    fn sync_mobile(&self) {
        if let Some(menu) = &self.mobile_menu {
            dom::set_hidden(menu, !self.nav.is_mobile_open());
        }
    }

    /// Nav click: scroll to the section and close the mobile overlay
    fn select(&mut self, target: &str) {
        let top = self.nav.select(target, &self.tracker);
        self.sync_mobile();
        if let Some(top) = top {
            smooth_scroll_to(top);
        }
    }
}

fn smooth_scroll_to(top: f64) {
    let Ok(window) = dom::window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Mounted navigation. Dropping it detaches every listener.
pub struct NavView {
    _listeners: Vec<EventListener>,
}

impl NavView {
    pub fn mount(config: &SiteConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let sections: Vec<Section<HtmlElement>> = config
            .nav
            .iter()
            .filter_map(|item| match dom::html_element_by_id(&item.target) {
                Ok(el) => Some(Section::new(item.target.clone(), el)),
                Err(e) => {
                    log::warn!("Nav item '{}' skipped: {}", item.label, e);
                    None
                }
            })
            .collect();
        log::info!("Tracking {} sections", sections.len());

        let state = Rc::new(RefCell::new(NavState {
            tracker: SectionTracker::new(sections, config.scroll_lookahead),
            nav: Navigation::new(config.nav.clone()),
            buttons: Vec::new(),
            mobile_menu: document.get_element_by_id(MOBILE_MENU_ID),
        }));
        let mut listeners = Vec::new();

        // Buttons in both the desktop bar and the mobile overlay
        for container_id in [NAV_LINKS_ID, MOBILE_MENU_ID] {
            let Some(container) = document.get_element_by_id(container_id) else {
                log::warn!("Missing #{}; nav buttons not rendered there", container_id);
                continue;
            };
            for item in &config.nav {
                let button = dom::create(&document, "button", "nav-item", Some(item.label.as_str()))?;
                button.set_attribute("data-target", &item.target)?;
                container.append_child(&button)?;

                let target = item.target.clone();
                let click_state = state.clone();
                listeners.push(EventListener::new(&button, "click", move |_| {
                    click_state.borrow_mut().select(&target);
                })?);

                if container_id == NAV_LINKS_ID {
                    state.borrow_mut().buttons.push((item.target.clone(), button));
                }
            }
        }

        // In-page calls to action (e.g. "Explore solutions")
        let links = document.query_selector_all("[data-scroll-to]")?;
        for i in 0..links.length() {
            let Some(el) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(target) = el.get_attribute("data-scroll-to") else {
                continue;
            };
            let click_state = state.clone();
            listeners.push(EventListener::new(&el, "click", move |_| {
                click_state.borrow_mut().select(&target);
            })?);
        }

        if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
            let toggle_state = state.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                let mut s = toggle_state.borrow_mut();
                s.nav.toggle_mobile();
                s.sync_mobile();
            })?);
        }

        {
            let scroll_state = state.clone();
            listeners.push(EventListener::new(&window, "scroll", move |_| {
                let Ok(window) = dom::window() else { return };
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let mut s = scroll_state.borrow_mut();
                if s.tracker.on_scroll(scroll_y) {
                    log::debug!("Active section: {:?}", s.tracker.active_id());
                    s.highlight();
                }
            })?);
        }

        {
            let s = state.borrow();
            s.highlight();
            s.sync_mobile();
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}
