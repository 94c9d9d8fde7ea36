use crate::error::TitleError;
use crate::page::types::Title;

/// Namespaces recognized when no configuration adds more
pub const DEFAULT_NAMESPACES: &[&str] = &[
    "Talk",
    "User",
    "Project",
    "File",
    "MediaWiki",
    "Template",
    "Help",
    "Category",
];

const ILLEGAL_CHARACTERS: &[char] = &['#', '<', '>', '[', ']', '|', '{', '}'];

/// Parses page names into [`Title`]s
#[derive(Debug, Clone)]
pub struct TitleFactory {
    namespaces: Vec<String>,
}

impl TitleFactory {
    pub fn new() -> Self {
        Self {
            namespaces: DEFAULT_NAMESPACES.iter().map(|ns| ns.to_string()).collect(),
        }
    }

    /// Adds namespaces on top of the defaults. Names already known are skipped.
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for ns in namespaces {
            let ns: String = ns.into();
            let ns = ns.trim().replace('_', " ");
            if ns.is_empty() || self.canonical_namespace(&ns).is_some() {
                continue;
            }
            self.namespaces.push(ns);
        }
        self
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn new_from_text(&self, text: &str) -> Result<Title, TitleError> {
        let normalized = text.trim().replace('_', " ");
        if normalized.is_empty() {
            return Err(TitleError::Empty);
        }

        if let Some(character) = normalized.chars().find(|c| ILLEGAL_CHARACTERS.contains(c)) {
            return Err(TitleError::IllegalCharacter {
                text: normalized,
                character,
            });
        }

        let (namespace, name) = self.split_namespace(&normalized);
        let name = name.trim();
        if name.is_empty() {
            return Err(TitleError::Empty);
        }

        let segments: Vec<String> = name.split('/').map(str::to_string).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(TitleError::EmptySegment(normalized));
        }

        Ok(Title::from_parts(namespace, segments))
    }

    fn split_namespace<'t>(&self, text: &'t str) -> (Option<String>, &'t str) {
        if let Some((prefix, rest)) = text.split_once(':') {
            if let Some(ns) = self.canonical_namespace(prefix.trim()) {
                return (Some(ns.to_string()), rest);
            }
        }
        (None, text)
    }

    fn canonical_namespace(&self, name: &str) -> Option<&str> {
        self.namespaces
            .iter()
            .find(|ns| ns.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}

impl Default for TitleFactory {
    fn default() -> Self {
        Self::new()
    }
}
