//! Request handlers for the list and count directives

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::SubPageListError;
use crate::finder::SubPageFinder;
use crate::page::{Page, PageHierarchyCreator, Title, TitleFactory};
use crate::params::{CountParams, ListParams};
use crate::renderer::{ListRenderer, RenderPolicy};

/// Returned to the caller when the requested page name does not parse
pub const INVALID_TITLE_MESSAGE: &str = "Error: invalid title provided";

/// Handles the sub page list directive: finds the sub pages of the requested
/// page, builds their hierarchy and renders it.
pub struct SubPageList<'a> {
    finder: &'a dyn SubPageFinder,
    hierarchy_creator: PageHierarchyCreator,
    renderer: &'a dyn ListRenderer,
    title_factory: TitleFactory,
}

impl<'a> SubPageList<'a> {
    pub fn new(
        finder: &'a dyn SubPageFinder,
        renderer: &'a dyn ListRenderer,
        title_factory: TitleFactory,
    ) -> Self {
        Self {
            finder,
            hierarchy_creator: PageHierarchyCreator::new(title_factory.clone()),
            renderer,
            title_factory,
        }
    }

    /// Resolves raw directive arguments and renders the list
    pub fn handle<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        self.handle_params(&ListParams::from_args(args))
    }

    pub fn handle_params(&self, params: &ListParams) -> Result<String> {
        match self.title_factory.new_from_text(&params.page) {
            Ok(title) => self.render_for_title(&title, &params.policy),
            Err(err) => {
                debug!(page = %params.page, error = %err, "invalid page title");
                Ok(INVALID_TITLE_MESSAGE.to_string())
            }
        }
    }

    pub fn render_for_title(&self, title: &Title, policy: &RenderPolicy) -> Result<String> {
        let top_level_page = self.page_hierarchy(title)?;
        Ok(self.renderer.render(&top_level_page, policy))
    }

    /// Builds the hierarchy rooted at `title`. Anything other than exactly
    /// one root means the finder returned pages that do not hang off `title`.
    fn page_hierarchy(&self, title: &Title) -> Result<Page> {
        let mut texts = self
            .finder
            .sub_pages_for(title)
            .with_context(|| format!("failed to find sub pages of {}", title))?;
        texts.push(title.full_text());

        let mut forest = self.hierarchy_creator.create_hierarchy(&texts)?;
        match forest.len() {
            1 => Ok(forest.remove(0)),
            0 => Err(SubPageListError::NoRoot.into()),
            count => Err(SubPageListError::MultipleRoots { count }.into()),
        }
    }
}

/// Handles the sub page count directive
pub struct SubPageCount<'a> {
    finder: &'a dyn SubPageFinder,
    title_factory: TitleFactory,
}

impl<'a> SubPageCount<'a> {
    pub fn new(finder: &'a dyn SubPageFinder, title_factory: TitleFactory) -> Self {
        Self {
            finder,
            title_factory,
        }
    }

    pub fn handle<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        let params = CountParams::from_args(args);
        let title = match self.title_factory.new_from_text(&params.page) {
            Ok(title) => title,
            Err(err) => {
                debug!(page = %params.page, error = %err, "invalid page title");
                return Ok(INVALID_TITLE_MESSAGE.to_string());
            }
        };

        let count = self
            .finder
            .count_sub_pages(&title, params.kids_only)
            .with_context(|| format!("failed to count sub pages of {}", title))?;
        Ok(count.to_string())
    }
}
