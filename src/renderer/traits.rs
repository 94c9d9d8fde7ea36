use crate::page::{Page, Title};
use crate::renderer::policy::{ListFormat, RenderPolicy};

/// Position of the renderer within the list being built
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The page whose sub pages are listed
    pub apex: &'a Title,
    pub depth: usize,
    pub format: ListFormat,
}

impl<'a> RenderContext<'a> {
    pub fn new(apex: &'a Title, format: ListFormat) -> Self {
        Self {
            apex,
            depth: 0,
            format,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            apex: self.apex,
            depth,
            format: self.format,
        }
    }

    /// List marker repeated once per nesting level, e.g. `**` at depth 2
    pub fn marker_prefix(&self) -> String {
        std::iter::repeat(self.format.marker())
            .take(self.depth)
            .collect()
    }
}

/// Produces the markup for a single list item
pub trait ItemRenderer {
    fn render_item(&self, page: &Page, context: &RenderContext) -> String;
}

/// Renders a whole page hierarchy as a list
pub trait ListRenderer {
    /// Renders the list of `page`'s sub pages, without the empty-list fallback
    fn render_list(&self, page: &Page, policy: &RenderPolicy) -> String;

    /// Text shown instead of a list when the page has no sub pages. The
    /// generated message names the page by its full title, namespace included.
    fn render_default(&self, page: &Page, policy: &RenderPolicy) -> String {
        match policy.default_text.as_str() {
            "" => format!("{} has no sub pages.", page.title().full_text()),
            "-" => String::new(),
            text => text.to_string(),
        }
    }

    fn render(&self, page: &Page, policy: &RenderPolicy) -> String {
        if !policy.show_top_page && !page.has_sub_pages() {
            return self.render_default(page, policy);
        }
        self.render_list(page, policy)
    }
}
