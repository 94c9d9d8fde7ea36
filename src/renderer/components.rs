use crate::page::Title;
use crate::renderer::policy::{Element, FullPathScope, PathStyle};

/// Helper for picking the visible label of a page
pub struct PathRenderer;

impl PathRenderer {
    pub fn render_label(&self, title: &Title, apex: &Title, style: PathStyle) -> String {
        match style {
            PathStyle::None => String::new(),
            PathStyle::LastSegment => title.subpage_text().to_string(),
            PathStyle::FullPath(FullPathScope::ChildrenOnly) => title
                .relative_to(apex)
                .unwrap_or_else(|| title.subpage_text().to_string()),
            PathStyle::FullPath(FullPathScope::NotParent) => {
                // Drop the segments above the apex, keep the apex name itself
                let skip = apex.depth().saturating_sub(1);
                if title == apex || title.is_descendant_of(apex) {
                    title.segments()[skip..].join("/")
                } else {
                    title.text()
                }
            }
            PathStyle::PageNameOnly => title.text(),
            PathStyle::FullPageName => title.full_text(),
        }
    }
}

/// Helper for wikitext link and transclusion syntax
pub struct LinkRenderer;

impl LinkRenderer {
    pub fn render_link(&self, title: &Title, label: &str) -> String {
        let target = title.full_text();
        if label.is_empty() || label == target {
            format!("[[{}]]", target)
        } else {
            format!("[[{}|{}]]", target, label)
        }
    }

    pub fn render_transclusion(&self, template: &str, title: &Title, label: &str) -> String {
        format!("{{{{{}|{}|{}}}}}", template, title.full_text(), label)
    }
}

/// Helper for the container element around the list
pub struct ElementWrapper;

impl ElementWrapper {
    pub fn wrap(&self, element: Element, class: &str, body: &str) -> String {
        let tag = element.tag();
        if class.is_empty() {
            format!("<{}>\n{}\n</{}>", tag, body, tag)
        } else {
            format!(
                "<{} class=\"{}\">\n{}\n</{}>",
                tag,
                escape_attribute(class),
                body,
                tag
            )
        }
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
