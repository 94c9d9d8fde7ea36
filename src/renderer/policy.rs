/// Resolved rendering options for a sub-page list.
///
/// Values arrive already validated from the parameter resolver; the renderer
/// trusts them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Emit the apex page itself as the first item
    pub show_top_page: bool,
    pub sort: SortOrder,
    pub intro: String,
    pub outro: String,
    /// Render items as links rather than plain text
    pub links: bool,
    /// Text used when there is nothing to list. Empty means a generated
    /// message, `-` means no output at all.
    pub default_text: String,
    /// Maximum number of items over the whole list, nested items included
    pub limit: usize,
    pub element: Element,
    pub class: String,
    pub format: ListFormat,
    pub path_style: PathStyle,
    /// Only list pages that have no sub pages of their own
    pub kids_only: bool,
    /// Template to render each item through instead of a link
    pub template: Option<String>,
}

pub const DEFAULT_LIMIT: usize = 200;
pub const MAX_LIMIT: usize = 500;

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            show_top_page: false,
            sort: SortOrder::Ascending,
            intro: String::new(),
            outro: String::new(),
            links: true,
            default_text: String::new(),
            limit: DEFAULT_LIMIT,
            element: Element::Div,
            class: "subpagelist".to_string(),
            format: ListFormat::Unordered,
            path_style: PathStyle::LastSegment,
            kids_only: false,
            template: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Container element wrapped around the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Div,
    P,
    Span,
}

impl Element {
    pub fn tag(&self) -> &'static str {
        match self {
            Element::Div => "div",
            Element::P => "p",
            Element::Span => "span",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Unordered,
    Ordered,
}

impl ListFormat {
    /// Line prefix character for one nesting level
    pub fn marker(&self) -> char {
        match self {
            ListFormat::Unordered => '*',
            ListFormat::Ordered => '#',
        }
    }
}

/// How much of a page's path is shown in its item label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// No label at all, only the list marker
    None,
    /// Last path segment
    LastSegment,
    FullPath(FullPathScope),
    /// Full page name without namespace
    PageNameOnly,
    /// Full page name with namespace
    FullPageName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullPathScope {
    /// Path below the listed page
    ChildrenOnly,
    /// Path starting at the listed page, leaving out its own parents
    NotParent,
}
