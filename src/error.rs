//! Error types for title parsing, hierarchy construction and list requests

use thiserror::Error;

/// Reasons a piece of text is not a valid page title
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title is empty")]
    Empty,

    #[error("title \"{0}\" contains an empty path segment")]
    EmptySegment(String),

    #[error("title \"{text}\" contains illegal character '{character}'")]
    IllegalCharacter { text: String, character: char },
}

/// Failure while turning a list of titles into a page hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("cannot build hierarchy: invalid title \"{text}\"")]
    InvalidTitle {
        text: String,
        #[source]
        source: TitleError,
    },
}

/// Violations of the list request's own invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubPageListError {
    #[error("expected exactly one top level page, found {count}")]
    MultipleRoots { count: usize },

    #[error("expected exactly one top level page, found none")]
    NoRoot,
}
