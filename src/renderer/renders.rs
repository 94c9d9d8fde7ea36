use crate::page::Page;
use crate::renderer::components::*;
use crate::renderer::policy::{PathStyle, RenderPolicy};
use crate::renderer::traits::*;

/// Default item rendering: a link, or plain text when links are off
pub struct LinkItemRenderer {
    pub path_style: PathStyle,
    pub links: bool,
}

impl ItemRenderer for LinkItemRenderer {
    fn render_item(&self, page: &Page, context: &RenderContext) -> String {
        let label = PathRenderer.render_label(page.title(), context.apex, self.path_style);

        // Nothing to link from without a label
        if !self.links || label.is_empty() {
            return label;
        }

        LinkRenderer.render_link(page.title(), &label)
    }
}

/// Renders each item through a caller supplied template
pub struct TemplateItemRenderer {
    pub template: String,
    pub path_style: PathStyle,
}

impl ItemRenderer for TemplateItemRenderer {
    fn render_item(&self, page: &Page, context: &RenderContext) -> String {
        let label = PathRenderer.render_label(page.title(), context.apex, self.path_style);
        LinkRenderer.render_transclusion(&self.template, page.title(), &label)
    }
}

/// Picks the item strategy for one render call
pub fn item_renderer_for(policy: &RenderPolicy) -> Box<dyn ItemRenderer> {
    match &policy.template {
        Some(template) => Box::new(TemplateItemRenderer {
            template: template.clone(),
            path_style: policy.path_style,
        }),
        None => Box::new(LinkItemRenderer {
            path_style: policy.path_style,
            links: policy.links,
        }),
    }
}
