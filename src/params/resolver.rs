use std::collections::HashMap;

use tracing::warn;

use crate::params::definitions::*;

/// A typed parameter value after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
}

/// Every parameter of a directive, set either from the arguments or from
/// its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    values: HashMap<&'static str, ParamValue>,
}

impl ResolvedParams {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(ParamValue::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    pub fn boolean(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ParamValue::Boolean(true)))
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ParamValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Turns raw directive arguments into [`ResolvedParams`].
///
/// Arguments are either `name=value` or bare values. Bare values fill the
/// directive's positional parameters in order, except that a bare name of a
/// boolean parameter switches it on.
pub struct ParameterResolver {
    directive: DirectiveDefinition,
}

impl ParameterResolver {
    pub fn new(directive: DirectiveDefinition) -> Self {
        Self { directive }
    }

    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> ResolvedParams {
        let mut values: HashMap<&'static str, ParamValue> = self
            .directive
            .parameters
            .iter()
            .map(|def| (def.name, default_value(def)))
            .collect();
        let mut positional = self.directive.positional.iter();

        for arg in args {
            let arg = arg.as_ref();

            let named = arg
                .split_once('=')
                .map(|(name, value)| (name.trim(), value))
                .filter(|(name, _)| looks_like_name(name));

            let (def, raw) = match named {
                Some((name, value)) => match self.directive.parameter(name) {
                    Some(def) => (def, value),
                    None => {
                        warn!(parameter = name, "ignoring unknown parameter");
                        continue;
                    }
                },
                None => match self.bare_flag(arg) {
                    Some(def) => (def, "yes"),
                    None => match positional.next().and_then(|name| self.directive.parameter(name)) {
                        Some(def) => (def, arg),
                        None => {
                            warn!(argument = arg, "ignoring unrecognized argument");
                            continue;
                        }
                    },
                },
            };

            match convert(def, raw) {
                Some(value) => {
                    values.insert(def.name, value);
                }
                None => warn!(
                    parameter = def.name,
                    value = raw,
                    default = def.default,
                    "invalid parameter value, using default"
                ),
            }
        }

        ResolvedParams { values }
    }

    fn bare_flag(&self, arg: &str) -> Option<&'static ParamDefinition> {
        self.directive
            .parameter(arg.trim())
            .filter(|def| def.kind == ParamKind::Boolean)
    }
}

/// Only `name=value` arguments whose name is a plain word are treated as
/// named, so text such as `1+1=2` still works as a positional value
fn looks_like_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn default_value(def: &ParamDefinition) -> ParamValue {
    convert(def, def.default).unwrap_or_else(|| ParamValue::Text(def.default.to_string()))
}

fn convert(def: &ParamDefinition, raw: &str) -> Option<ParamValue> {
    let raw = raw.trim();
    match def.kind {
        ParamKind::Text => Some(ParamValue::Text(raw.to_string())),
        ParamKind::Boolean => parse_bool(raw).map(ParamValue::Boolean),
        ParamKind::Integer { min, max } => raw
            .parse::<i64>()
            .ok()
            .map(|value| ParamValue::Integer(value.clamp(min, max))),
        ParamKind::Choice(accepted) => {
            let lowered = raw.to_lowercase();
            if accepted.iter().any(|value| *value == lowered) {
                Some(ParamValue::Text(lowered))
            } else {
                None
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Some(true),
        "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
