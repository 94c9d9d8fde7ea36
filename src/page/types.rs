use std::fmt;

/// A parsed page identifier: an optional namespace plus the `/`-separated
/// path segments of the page name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title {
    namespace: Option<String>,
    segments: Vec<String>,
}

impl Title {
    /// Builds a title from already validated parts. `segments` must not be empty.
    pub(crate) fn from_parts(namespace: Option<String>, segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            namespace,
            segments,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of path segments. A top level page has depth 1.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Page name without the namespace prefix
    pub fn text(&self) -> String {
        self.segments.join("/")
    }

    /// Page name including the namespace prefix
    pub fn full_text(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}:{}", ns, self.text()),
            None => self.text(),
        }
    }

    /// The last path segment
    pub fn subpage_text(&self) -> &str {
        // from_parts guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The title one level up, or `None` for a top level page.
    pub fn base_title(&self) -> Option<Title> {
        if self.segments.len() < 2 {
            return None;
        }

        Some(Title {
            namespace: self.namespace.clone(),
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn is_descendant_of(&self, ancestor: &Title) -> bool {
        self.namespace == ancestor.namespace
            && self.segments.len() > ancestor.segments.len()
            && self.segments.starts_with(&ancestor.segments)
    }

    /// Path of this title below `ancestor`, e.g. `B/C` for `A/B/C` relative to `A`.
    pub fn relative_to(&self, ancestor: &Title) -> Option<String> {
        if !self.is_descendant_of(ancestor) {
            return None;
        }

        Some(self.segments[ancestor.segments.len()..].join("/"))
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_text())
    }
}

/// A node in a sub-page hierarchy.
///
/// Pages own their children. The parent is kept only as a title so lookups
/// never form reference cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: Title,
    parent: Option<Title>,
    sub_pages: Vec<Page>,
}

impl Page {
    pub fn new(title: Title) -> Self {
        Self {
            title,
            parent: None,
            sub_pages: Vec::new(),
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn parent(&self) -> Option<&Title> {
        self.parent.as_ref()
    }

    pub fn sub_pages(&self) -> &[Page] {
        &self.sub_pages
    }

    pub fn has_sub_pages(&self) -> bool {
        !self.sub_pages.is_empty()
    }

    /// Attaches `page` as a child. A child with the same title is not added twice.
    pub fn add_sub_page(&mut self, mut page: Page) {
        if self.sub_pages.iter().any(|p| p.title == page.title) {
            return;
        }

        page.parent = Some(self.title.clone());
        self.sub_pages.push(page);
    }

    /// Total number of pages below this one
    pub fn descendant_count(&self) -> usize {
        self.sub_pages
            .iter()
            .map(|p| 1 + p.descendant_count())
            .sum()
    }
}
