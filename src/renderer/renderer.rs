use std::cmp::Ordering;

use tracing::debug;

use crate::page::Page;
use crate::renderer::components::*;
use crate::renderer::policy::{RenderPolicy, SortOrder};
use crate::renderer::renders::item_renderer_for;
use crate::renderer::traits::*;

/// Renders sub-page hierarchies as wikitext lists.
///
/// Each item is one line prefixed with `*` (or `#` for ordered lists),
/// repeated once per nesting level:
///
/// ```text
/// * [[A/B|B]]
/// ** [[A/B/C|C]]
/// * [[A/D|D]]
/// ```
pub struct WikitextListRenderer;

impl WikitextListRenderer {
    fn render_sub_pages(
        &self,
        page: &Page,
        context: &RenderContext,
        items: &dyn ItemRenderer,
        policy: &RenderPolicy,
        budget: &mut usize,
        lines: &mut Vec<String>,
    ) {
        let mut sub_pages: Vec<&Page> = page
            .sub_pages()
            .iter()
            .filter(|p| !policy.kids_only || !p.has_sub_pages())
            .collect();

        // Stable sort: equal names keep construction order in both directions
        sub_pages.sort_by(|a, b| compare_pages(a, b, policy.sort));

        let child_context = context.with_depth(context.depth + 1);
        for sub_page in sub_pages {
            if *budget == 0 {
                return;
            }
            *budget -= 1;

            lines.push(render_line(context, &items.render_item(sub_page, context)));
            self.render_sub_pages(sub_page, &child_context, items, policy, budget, lines);
        }
    }
}

impl ListRenderer for WikitextListRenderer {
    fn render_list(&self, page: &Page, policy: &RenderPolicy) -> String {
        let items = item_renderer_for(policy);
        let root_context = RenderContext::new(page.title(), policy.format).with_depth(1);
        let mut budget = policy.limit;
        let mut lines = Vec::new();

        if policy.show_top_page {
            lines.push(render_line(
                &root_context,
                &items.render_item(page, &root_context),
            ));
            let nested = root_context.with_depth(2);
            self.render_sub_pages(page, &nested, items.as_ref(), policy, &mut budget, &mut lines);
        } else {
            self.render_sub_pages(
                page,
                &root_context,
                items.as_ref(),
                policy,
                &mut budget,
                &mut lines,
            );
        }

        debug!(
            page = %page.title(),
            items = lines.len(),
            limit = policy.limit,
            "rendered sub page list"
        );

        let list = if lines.is_empty() {
            String::new()
        } else {
            ElementWrapper.wrap(policy.element, &policy.class, &lines.join("\n"))
        };

        // Intro and outro sit outside the container, one line each
        [policy.intro.as_str(), list.as_str(), policy.outro.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn compare_pages(a: &Page, b: &Page, sort: SortOrder) -> Ordering {
    let ordering = a.title().text().cmp(&b.title().text());
    match sort {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

fn render_line(context: &RenderContext, item: &str) -> String {
    let prefix = context.marker_prefix();
    if item.is_empty() {
        prefix
    } else {
        format!("{} {}", prefix, item)
    }
}
