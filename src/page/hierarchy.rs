use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::HierarchyError;
use crate::page::title::TitleFactory;
use crate::page::types::{Page, Title};

/// Turns a flat list of titles into a forest of [`Page`] trees, using the
/// `/` path structure of the titles as the only source of hierarchy.
pub struct PageHierarchyCreator {
    title_factory: TitleFactory,
}

// Construction slot: the title and the indices of its children in `slots`
struct Slot {
    title: Title,
    children: Vec<usize>,
}

impl PageHierarchyCreator {
    pub fn new(title_factory: TitleFactory) -> Self {
        Self { title_factory }
    }

    /// Parses every text into a title and builds the forest.
    ///
    /// A single malformed title aborts the whole build.
    pub fn create_hierarchy<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Page>, HierarchyError> {
        let titles = texts
            .iter()
            .map(|text| {
                let text = text.as_ref();
                self.title_factory
                    .new_from_text(text)
                    .map_err(|source| HierarchyError::InvalidTitle {
                        text: text.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::build(titles))
    }

    /// Builds the forest from parsed titles.
    ///
    /// Titles whose parent is not part of the input become roots. Multiple
    /// roots are returned as-is.
    pub fn build(titles: Vec<Title>) -> Vec<Page> {
        let mut seen = HashSet::new();
        let mut titles: Vec<Title> = titles
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();

        // Stable, so titles of equal depth keep their input order
        titles.sort_by_key(Title::depth);

        let mut slots: Vec<Slot> = Vec::with_capacity(titles.len());
        let mut index: HashMap<Title, usize> = HashMap::with_capacity(titles.len());
        let mut roots = Vec::new();

        for title in titles {
            let id = slots.len();
            let parent_id = title.base_title().and_then(|parent| index.get(&parent).copied());

            index.insert(title.clone(), id);
            slots.push(Slot {
                title,
                children: Vec::new(),
            });

            match parent_id {
                Some(parent_id) => slots[parent_id].children.push(id),
                None => roots.push(id),
            }
        }

        debug!(pages = slots.len(), roots = roots.len(), "built page hierarchy");

        let mut slots: Vec<Option<Slot>> = slots.into_iter().map(Some).collect();
        roots
            .into_iter()
            .filter_map(|id| Self::assemble(&mut slots, id))
            .collect()
    }

    fn assemble(slots: &mut [Option<Slot>], id: usize) -> Option<Page> {
        let slot = slots.get_mut(id)?.take()?;
        let mut page = Page::new(slot.title);
        for child_id in slot.children {
            if let Some(child) = Self::assemble(slots, child_id) {
                page.add_sub_page(child);
            }
        }
        Some(page)
    }
}

impl Default for PageHierarchyCreator {
    fn default() -> Self {
        Self::new(TitleFactory::new())
    }
}
