use crate::params::definitions::{COUNT_DIRECTIVE, LIST_DIRECTIVE};
use crate::params::resolver::{ParameterResolver, ResolvedParams};
use crate::renderer::policy::*;

/// Arguments of the list directive: the page to list plus how to render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: String,
    pub policy: RenderPolicy,
}

impl ListParams {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        Self::from_resolved(&ParameterResolver::new(LIST_DIRECTIVE).resolve(args))
    }

    pub fn from_resolved(params: &ResolvedParams) -> Self {
        let template = params.text("template");
        let limit = params
            .integer("limit")
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(DEFAULT_LIMIT);

        let policy = RenderPolicy {
            show_top_page: params.boolean("showpage"),
            sort: match params.text("sort") {
                "desc" => SortOrder::Descending,
                _ => SortOrder::Ascending,
            },
            intro: params.text("intro").to_string(),
            outro: params.text("outro").to_string(),
            links: params.boolean("links"),
            default_text: params.text("default").to_string(),
            limit,
            element: match params.text("element") {
                "p" => Element::P,
                "span" => Element::Span,
                _ => Element::Div,
            },
            class: params.text("class").to_string(),
            format: match params.text("format") {
                "ol" | "ordered" => ListFormat::Ordered,
                _ => ListFormat::Unordered,
            },
            path_style: path_style(params.text("pathstyle")),
            kids_only: params.boolean("kidsonly"),
            template: (!template.is_empty()).then(|| template.to_string()),
        };

        Self {
            page: params.text("page").to_string(),
            policy,
        }
    }
}

/// Arguments of the count directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountParams {
    pub page: String,
    /// Count direct children only instead of all descendants
    pub kids_only: bool,
}

impl CountParams {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let params = ParameterResolver::new(COUNT_DIRECTIVE).resolve(args);
        Self {
            page: params.text("page").to_string(),
            kids_only: params.boolean("kidsonly"),
        }
    }
}

fn path_style(value: &str) -> PathStyle {
    match value {
        "none" | "no" => PathStyle::None,
        "children" => PathStyle::FullPath(FullPathScope::ChildrenOnly),
        "notparent" => PathStyle::FullPath(FullPathScope::NotParent),
        "pagename" => PathStyle::PageNameOnly,
        "full" | "fullpagename" => PathStyle::FullPageName,
        _ => PathStyle::LastSegment,
    }
}
