//! Portfolio grid and detail modal binding

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::dom::{self, EventListener};
use super::reveal::Reveal;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::portfolio::{DetailModal, Filter, Portfolio, Project, ScrollLock};
use crate::reveal::RevealOptions;

const FILTERS_ID: &str = "portfolio-filters";
const GRID_ID: &str = "portfolio-grid";
const MODAL_ID: &str = "project-modal";

/// `document.body.style.overflow`
struct BodyScroll {
    body: Option<HtmlElement>,
}

impl ScrollLock for BodyScroll {
    fn lock(&mut self) -> String {
        let Some(body) = &self.body else {
            return String::new();
        };
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        previous
    }

    fn restore(&mut self, previous: &str) {
        let Some(body) = &self.body else { return };
        let style = body.style();
        if previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", previous);
        }
    }
}

/// A rendered grid card; dropping it detaches its listener and observer
struct Card {
    _reveal: Option<Reveal>,
    _click: EventListener,
}

struct PortfolioState {
    document: Document,
    portfolio: Portfolio,
    filter: Filter,
    modal: DetailModal,
    body: BodyScroll,
    grid: Element,
    modal_el: Element,
    filter_buttons: Vec<(Filter, Element)>,
    cards: Vec<Card>,
    reveal: RevealOptions,
    stagger_ms: u32,
}

impl PortfolioState {
    fn set_filter(this: &Rc<RefCell<Self>>, filter: Filter) {
        {
            let mut s = this.borrow_mut();
            log::debug!("Portfolio filter: {}", filter.label());
            s.filter = filter;
            for (f, button) in &s.filter_buttons {
                let _ = button.class_list().toggle_with_force("active", *f == s.filter);
            }
        }
        if let Err(e) = Self::render_grid(this) {
            log::error!("Failed to render portfolio grid: {e}");
        }
    }

    /// Replace all cards with the ones matching the current filter
    fn render_grid(this: &Rc<RefCell<Self>>) -> Result<()> {
        let weak = Rc::downgrade(this);
        let mut s = this.borrow_mut();
        s.cards.clear();
        s.grid.set_inner_html("");

        let indices = s.portfolio.filtered_indices(&s.filter);
        let mut cards = Vec::with_capacity(indices.len());
        for (slot, index) in indices.into_iter().enumerate() {
            let Some(project) = s.portfolio.project(index) else {
                continue;
            };
            let card = render_card(&s.document, project)?;
            s.grid.append_child(&card)?;

            let reveal = match card.dyn_ref::<HtmlElement>() {
                Some(el) => Some(Reveal::observe(el, slot as u32 * s.stagger_ms, &s.reveal)?),
                None => None,
            };
            let click = card_click(&card, weak.clone(), index)?;
            cards.push(Card {
                _reveal: reveal,
                _click: click,
            });
        }
        log::debug!("Rendered {} portfolio cards", cards.len());
        s.cards = cards;
        Ok(())
    }

    fn open(&mut self, index: usize) {
        let Some(project) = self.portfolio.project(index).cloned() else {
            return;
        };
        self.modal.open(index, &mut self.body);
        if let Err(e) = render_modal(&self.document, &self.modal_el, &project) {
            log::error!("Failed to render project modal: {e}");
        }
        dom::set_hidden(&self.modal_el, false);
    }

    fn close(&mut self) {
        if self.modal.close(&mut self.body) {
            dom::set_hidden(&self.modal_el, true);
        }
    }
}

fn card_click(card: &Element, state: Weak<RefCell<PortfolioState>>, index: usize) -> Result<EventListener> {
    EventListener::new(card, "click", move |_| {
        if let Some(state) = state.upgrade() {
            state.borrow_mut().open(index);
        }
    })
}

fn render_card(document: &Document, project: &Project) -> Result<Element> {
    let card = dom::create(document, "div", "card", None)?;

    let media = dom::create(document, "div", "card-media", None)?;
    let img = dom::create(document, "img", "", None)?;
    img.set_attribute("src", &project.image)?;
    img.set_attribute("alt", &project.title)?;
    media.append_child(&img)?;
    card.append_child(&media)?;

    let body = dom::create(document, "div", "card-body", None)?;
    for (tag, class, text) in [
        ("h3", "card-title", project.title.as_str()),
        ("p", "card-subtitle", project.subtitle.as_str()),
        ("p", "card-desc", project.description.as_str()),
        ("div", "card-tech", project.tech.as_str()),
    ] {
        body.append_child(&dom::create(document, tag, class, Some(text))?)?;
    }
    card.append_child(&body)?;
    Ok(card)
}

/// Fill the modal's slots for `project`
fn render_modal(document: &Document, modal: &Element, project: &Project) -> Result<()> {
    let slot = |class: &str| -> Result<Element> {
        modal
            .query_selector(&format!(".{class}"))?
            .ok_or_else(|| SiteError::MissingElement(format!("{MODAL_ID} .{class}")))
    };

    let image = slot("modal-image")?;
    image.set_attribute("src", &project.image)?;
    image.set_attribute("alt", &project.title)?;
    slot("modal-title")?.set_text_content(Some(project.title.as_str()));
    slot("modal-subtitle")?.set_text_content(Some(project.subtitle.as_str()));
    slot("modal-desc")?.set_text_content(Some(project.description.as_str()));

    let tech = slot("modal-tech")?;
    tech.set_inner_html("");
    for item in project.tech_list() {
        tech.append_child(&dom::create(document, "span", "chip", Some(item))?)?;
    }

    let links = slot("modal-links")?;
    links.set_inner_html("");
    for (kind, url) in project.links() {
        let a = dom::create(document, "a", "modal-link", Some(kind.label()))?;
        a.set_attribute("href", url)?;
        a.set_attribute("target", "_blank")?;
        a.set_attribute("rel", "noopener noreferrer")?;
        links.append_child(&a)?;
    }
    Ok(())
}

/// Mounted portfolio section. Dropping it detaches every listener and
/// observer, and releases the scroll lock if the modal is open.
pub struct PortfolioView {
    state: Rc<RefCell<PortfolioState>>,
    _listeners: Vec<EventListener>,
}

impl PortfolioView {
    pub fn mount(config: &SiteConfig, portfolio: Portfolio) -> Result<Self> {
        let document = dom::document()?;
        let filters_el = dom::element_by_id(FILTERS_ID)?;
        let grid = dom::element_by_id(GRID_ID)?;
        let modal_el = dom::element_by_id(MODAL_ID)?;
        dom::set_hidden(&modal_el, true);

        log::info!(
            "Portfolio mounted: {} projects, {} categories",
            portfolio.projects.len(),
            portfolio.categories.len()
        );

        let filters = portfolio.filters();
        let state = Rc::new(RefCell::new(PortfolioState {
            document: document.clone(),
            portfolio,
            filter: Filter::All,
            modal: DetailModal::new(),
            body: BodyScroll {
                body: document.body(),
            },
            grid,
            modal_el: modal_el.clone(),
            filter_buttons: Vec::new(),
            cards: Vec::new(),
            reveal: config.reveal,
            stagger_ms: config.reveal_stagger_ms,
        }));

        let mut listeners = Vec::new();
        for filter in filters {
            let button = dom::create(&document, "button", "filter", Some(filter.label()))?;
            filters_el.append_child(&button)?;

            let click_state = state.clone();
            let clicked = filter.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                PortfolioState::set_filter(&click_state, clicked.clone());
            })?);
            state.borrow_mut().filter_buttons.push((filter, button));
        }

        // Close control and backdrop
        for selector in [".modal-close", ".modal-backdrop"] {
            let Some(el) = modal_el.query_selector(selector)? else {
                log::warn!("Missing {} in #{}", selector, MODAL_ID);
                continue;
            };
            let close_state = state.clone();
            listeners.push(EventListener::new(&el, "click", move |_| {
                close_state.borrow_mut().close();
            })?);
        }

        PortfolioState::set_filter(&state, Filter::All);

        Ok(Self {
            state,
            _listeners: listeners,
        })
    }
}

impl Drop for PortfolioView {
    fn drop(&mut self) {
        let mut s = self.state.borrow_mut();
        s.close();
        s.cards.clear();
    }
}
