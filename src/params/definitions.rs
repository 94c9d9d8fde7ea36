//! Declarative option tables for the list and count directives
//!
//! Every option a directive accepts is listed here once, with its default,
//! the values it accepts and the aliases it answers to. The resolver reads
//! nothing else.

use crate::renderer::policy::MAX_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Boolean,
    /// Values outside the range are clamped
    Integer { min: i64, max: i64 },
    /// Case-insensitive set of accepted values
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct ParamDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub default: &'static str,
    pub kind: ParamKind,
}

impl ParamDefinition {
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DirectiveDefinition {
    pub names: &'static [&'static str],
    pub parameters: &'static [ParamDefinition],
    /// Parameters filled, in order, by arguments given without a name
    pub positional: &'static [&'static str],
}

impl DirectiveDefinition {
    pub fn parameter(&self, name: &str) -> Option<&'static ParamDefinition> {
        self.parameters.iter().find(|p| p.answers_to(name))
    }
}

pub const SORT_VALUES: &[&str] = &["asc", "desc"];
pub const ELEMENT_VALUES: &[&str] = &["div", "p", "span"];
pub const FORMAT_VALUES: &[&str] = &["ul", "unordered", "ol", "ordered"];
pub const PATH_STYLE_VALUES: &[&str] = &[
    "none",
    "no",
    "subpagename",
    "children",
    "notparent",
    "pagename",
    "full",
    "fullpagename",
];

pub const LIST_PARAMETERS: &[ParamDefinition] = &[
    ParamDefinition {
        name: "page",
        aliases: &["parent"],
        default: "",
        kind: ParamKind::Text,
    },
    ParamDefinition {
        name: "showpage",
        aliases: &["showparent"],
        default: "no",
        kind: ParamKind::Boolean,
    },
    ParamDefinition {
        name: "sort",
        aliases: &["order"],
        default: "asc",
        kind: ParamKind::Choice(SORT_VALUES),
    },
    ParamDefinition {
        name: "intro",
        aliases: &[],
        default: "",
        kind: ParamKind::Text,
    },
    ParamDefinition {
        name: "outro",
        aliases: &[],
        default: "",
        kind: ParamKind::Text,
    },
    ParamDefinition {
        name: "links",
        aliases: &["link"],
        default: "yes",
        kind: ParamKind::Boolean,
    },
    ParamDefinition {
        name: "default",
        aliases: &[],
        default: "",
        kind: ParamKind::Text,
    },
    ParamDefinition {
        name: "limit",
        aliases: &[],
        default: "200",
        kind: ParamKind::Integer { min: 1, max: MAX_LIMIT as i64 },
    },
    ParamDefinition {
        name: "element",
        aliases: &[],
        default: "div",
        kind: ParamKind::Choice(ELEMENT_VALUES),
    },
    ParamDefinition {
        name: "class",
        aliases: &[],
        default: "subpagelist",
        kind: ParamKind::Text,
    },
    ParamDefinition {
        name: "format",
        aliases: &["liststyle"],
        default: "ul",
        kind: ParamKind::Choice(FORMAT_VALUES),
    },
    ParamDefinition {
        name: "pathstyle",
        aliases: &["showpath"],
        default: "subpagename",
        kind: ParamKind::Choice(PATH_STYLE_VALUES),
    },
    ParamDefinition {
        name: "kidsonly",
        aliases: &[],
        default: "no",
        kind: ParamKind::Boolean,
    },
    ParamDefinition {
        name: "template",
        aliases: &[],
        default: "",
        kind: ParamKind::Text,
    },
];

pub const COUNT_PARAMETERS: &[ParamDefinition] = &[
    ParamDefinition {
        name: "page",
        aliases: &["parent"],
        default: "",
        kind: ParamKind::Text,
    },
    ParamDefinition {
        name: "kidsonly",
        aliases: &[],
        default: "no",
        kind: ParamKind::Boolean,
    },
];

pub const LIST_DIRECTIVE: DirectiveDefinition = DirectiveDefinition {
    names: &["subpagelist", "splist", "subpages"],
    parameters: LIST_PARAMETERS,
    positional: &["page", "format", "pathstyle", "sort"],
};

pub const COUNT_DIRECTIVE: DirectiveDefinition = DirectiveDefinition {
    names: &["subpagecount"],
    parameters: COUNT_PARAMETERS,
    positional: &["page"],
};
