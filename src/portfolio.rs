//! Portfolio showcase
//!
//! Project content (bundled JSON), the category filter, and the detail
//! modal with its background scroll lock.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Bundled portfolio content
pub const BUNDLED_CONTENT: &str = include_str!("../content/projects.json");

/// Label of the filter that shows everything
pub const ALL: &str = "All";

/// A showcased project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub category: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Comma-separated technology list
    pub tech: String,
    #[serde(default)]
    pub status: String,
    pub image: String,
    #[serde(default)]
    pub frontend: Option<String>,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

/// Kinds of external link a project may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Frontend,
    Backend,
    Demo,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Frontend => "Frontend Code",
            LinkKind::Backend => "Backend Code",
            LinkKind::Demo => "Live Demo",
        }
    }
}

impl Project {
    /// Technology chips: the tech list split on commas and trimmed
    pub fn tech_list(&self) -> Vec<&str> {
        self.tech
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// External links that are present, in display order
    pub fn links(&self) -> Vec<(LinkKind, &str)> {
        [
            (LinkKind::Frontend, &self.frontend),
            (LinkKind::Backend, &self.backend),
            (LinkKind::Demo, &self.demo),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|u| (kind, u)))
        .collect()
    }
}

/// Category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter button label
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Filter::All
        } else {
            Filter::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => project.category == *c,
        }
    }
}

/// Portfolio content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Filterable categories (excluding "All")
    pub categories: Vec<String>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SiteError::Content)
    }

    /// The content compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CONTENT)
    }

    /// Filter buttons, "All" first
    pub fn filters(&self) -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(self.categories.iter().cloned().map(Filter::Category))
            .collect()
    }

    /// Indices into `projects` that pass `filter`, in content order
    pub fn filtered_indices(&self, filter: &Filter) -> Vec<usize> {
        self.projects
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

/// Background scroll control used while the modal is open
pub trait ScrollLock {
    /// Disable page scrolling; returns the previous overflow value
    fn lock(&mut self) -> String;
    /// Put back a value returned by `lock`
    fn restore(&mut self, previous: &str);
}

/// Detail modal state
#[derive(Debug, Default)]
pub struct DetailModal {
    selected: Option<usize>,
    saved_overflow: Option<String>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Index of the project being shown
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Show `index`. The scroll lock is taken once, even when switching
    /// projects while open.
    pub fn open<L: ScrollLock + ?Sized>(&mut self, index: usize, lock: &mut L) {
        if self.saved_overflow.is_none() {
            self.saved_overflow = Some(lock.lock());
        }
        self.selected = Some(index);
    }

    /// Hide the modal. Restores scrolling only if this call released the
    /// lock; returns whether it did.
    pub fn close<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> bool {
        self.selected = None;
        match self.saved_overflow.take() {
            Some(previous) => {
                lock.restore(&previous);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, category: &str) -> Project {
        Project {
            title: title.into(),
            subtitle: String::new(),
            category: category.into(),
            description: String::new(),
            tech: "Rust, WebAssembly".into(),
            status: String::new(),
            image: String::new(),
            frontend: None,
            backend: None,
            demo: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("one", "Web Development"),
            project("two", "Enterprise"),
            project("three", "Web Development"),
        ]
    }

    /// Records lock/restore calls against a fake body overflow
    #[derive(Default)]
    struct BodyStyle {
        overflow: String,
        locks: u32,
        restores: u32,
    }

    impl ScrollLock for BodyStyle {
        fn lock(&mut self) -> String {
            self.locks += 1;
            std::mem::replace(&mut self.overflow, "hidden".into())
        }

        fn restore(&mut self, previous: &str) {
            self.restores += 1;
            self.overflow = previous.to_string();
        }
    }

    #[test]
    fn test_bundled_content_parses() {
        let portfolio = Portfolio::bundled().unwrap();
        assert!(!portfolio.projects.is_empty());
        assert_eq!(portfolio.filters()[0], Filter::All);
        assert_eq!(portfolio.filters().len(), portfolio.categories.len() + 1);
        let lccg = &portfolio.projects[0];
        assert_eq!(lccg.links(), vec![(LinkKind::Demo, "https://cinnamonleos.org")]);
    }

    #[test]
    fn test_invalid_content() {
        let err = Portfolio::from_json(r#"{ "projects": 3 }"#).unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }

    fn titles(portfolio: &Portfolio, filter: &Filter) -> Vec<String> {
        portfolio
            .filtered_indices(filter)
            .into_iter()
            .filter_map(|i| portfolio.project(i))
            .map(|p| p.title.clone())
            .collect()
    }

    fn sample_portfolio() -> Portfolio {
        Portfolio {
            categories: vec!["Web Development".into(), "Mobile App".into()],
            projects: sample(),
        }
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let portfolio = sample_portfolio();
        assert_eq!(titles(&portfolio, &Filter::All), ["one", "two", "three"]);
    }

    #[test]
    fn test_filter_by_category() {
        let portfolio = sample_portfolio();
        assert_eq!(
            titles(&portfolio, &Filter::from_label("Web Development")),
            ["one", "three"]
        );
    }

    #[test]
    fn test_filter_empty_category() {
        let portfolio = sample_portfolio();
        assert!(portfolio.filtered_indices(&Filter::from_label("Mobile App")).is_empty());
    }

    #[test]
    fn test_filtered_indices() {
        let portfolio = Portfolio {
            categories: vec!["Enterprise".into()],
            projects: sample(),
        };
        assert_eq!(portfolio.filtered_indices(&Filter::All), vec![0, 1, 2]);
        assert_eq!(
            portfolio.filtered_indices(&Filter::Category("Enterprise".into())),
            vec![1]
        );
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(Filter::from_label("All"), Filter::All);
        assert_eq!(Filter::from_label("Desktop App").label(), "Desktop App");
    }

    #[test]
    fn test_tech_list() {
        let mut p = project("x", "Enterprise");
        p.tech = " Rust ,  Leptos,,WASM ".into();
        assert_eq!(p.tech_list(), vec!["Rust", "Leptos", "WASM"]);
    }

    #[test]
    fn test_links_only_when_present() {
        let mut p = project("x", "Enterprise");
        assert!(p.links().is_empty());
        p.backend = Some("https://example.com/api".into());
        p.frontend = Some("https://example.com/ui".into());
        let kinds: Vec<LinkKind> = p.links().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![LinkKind::Frontend, LinkKind::Backend]);
        assert_eq!(LinkKind::Demo.label(), "Live Demo");
    }

    #[test]
    fn test_modal_locks_and_restores_once() {
        let mut body = BodyStyle {
            overflow: "auto".into(),
            ..Default::default()
        };
        let mut modal = DetailModal::new();

        modal.open(2, &mut body);
        assert!(modal.is_open());
        assert_eq!(modal.selected(), Some(2));
        assert_eq!(body.overflow, "hidden");

        // Close control, then a stray backdrop click
        assert!(modal.close(&mut body));
        assert!(!modal.close(&mut body));
        assert_eq!(body.overflow, "auto");
        assert_eq!((body.locks, body.restores), (1, 1));
    }

    #[test]
    fn test_modal_switch_project_keeps_single_lock() {
        let mut body = BodyStyle::default();
        let mut modal = DetailModal::new();
        modal.open(0, &mut body);
        modal.open(1, &mut body);
        assert_eq!(body.locks, 1);
        assert!(modal.close(&mut body));
        assert_eq!(body.overflow, "");
    }

    #[test]
    fn test_close_without_open() {
        let mut body = BodyStyle::default();
        assert!(!DetailModal::new().close(&mut body));
        assert_eq!(body.restores, 0);
    }
}
