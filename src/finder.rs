//! Sources of sub-page titles

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::page::{Title, TitleFactory};

/// Looks up the sub pages of a page.
///
/// Implementations return a snapshot of the raw titles of every descendant;
/// parsing them is left to the hierarchy creator.
pub trait SubPageFinder {
    fn sub_pages_for(&self, title: &Title) -> Result<Vec<String>>;

    /// Number of distinct descendants, or of direct children only when
    /// `kids_only` is set
    fn count_sub_pages(&self, title: &Title, kids_only: bool) -> Result<usize> {
        let sub_pages: HashSet<String> = self
            .sub_pages_for(title)?
            .iter()
            .map(|text| normalize(text))
            .collect();
        if !kids_only {
            return Ok(sub_pages.len());
        }

        let prefix = format!("{}/", title.full_text());
        Ok(sub_pages
            .iter()
            .filter(|text| {
                text.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains('/'))
            })
            .count())
    }
}

/// A page index held in memory, typically loaded from a text file with one
/// title per line. Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct InMemoryPageIndex {
    // (raw text, normalized full text)
    pages: Vec<(String, String)>,
}

impl InMemoryPageIndex {
    pub fn new<I, S>(title_factory: &TitleFactory, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .map(|raw| {
                let raw: String = raw.into();
                let raw = raw.trim().to_string();
                let key = title_factory
                    .new_from_text(&raw)
                    .map(|title| title.full_text())
                    .unwrap_or_else(|_| normalize(&raw));
                (raw, key)
            })
            .collect();
        Self { pages }
    }

    pub fn from_reader<R: BufRead>(title_factory: &TitleFactory, reader: R) -> Result<Self> {
        let mut pages = Vec::new();
        for line in reader.lines() {
            let line = line.context("failed to read page index")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            pages.push(line.to_string());
        }
        Ok(Self::new(title_factory, pages))
    }

    pub fn from_file(title_factory: &TitleFactory, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open page index {}", path.display()))?;
        let index = Self::from_reader(title_factory, BufReader::new(file))?;
        debug!(path = %path.display(), pages = index.len(), "loaded page index");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl SubPageFinder for InMemoryPageIndex {
    fn sub_pages_for(&self, title: &Title) -> Result<Vec<String>> {
        let prefix = format!("{}/", title.full_text());
        Ok(self
            .pages
            .iter()
            .filter(|(_, key)| key.starts_with(&prefix))
            .map(|(raw, _)| raw.clone())
            .collect())
    }

    fn count_sub_pages(&self, title: &Title, kids_only: bool) -> Result<usize> {
        let prefix = format!("{}/", title.full_text());
        let sub_pages: HashSet<&str> = self
            .pages
            .iter()
            .filter_map(|(_, key)| key.strip_prefix(&prefix))
            .filter(|rest| !kids_only || !rest.contains('/'))
            .collect();
        Ok(sub_pages.len())
    }
}

fn normalize(text: &str) -> String {
    text.trim().replace('_', " ")
}
