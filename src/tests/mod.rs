#[cfg(test)]
mod formatting_tests {
    use crate::{
        ListFormat, ListRenderer, Page, PageHierarchyCreator, PathStyle, RenderPolicy, SortOrder,
        WikitextListRenderer,
    };

    fn create_test_page(texts: &[&str]) -> Page {
        let mut forest = PageHierarchyCreator::default()
            .create_hierarchy(texts)
            .unwrap();
        assert_eq!(forest.len(), 1, "test hierarchy must have one root");
        forest.remove(0)
    }

    fn abcd() -> Page {
        create_test_page(&["A", "A/B", "A/B/C", "A/D"])
    }

    fn item_count(output: &str) -> usize {
        output
            .lines()
            .filter(|line| line.starts_with('*') || line.starts_with('#'))
            .count()
    }

    fn wrapped(lines: &[&str]) -> String {
        format!("<div class=\"subpagelist\">\n{}\n</div>", lines.join("\n"))
    }

    #[test]
    fn test_renders_nested_list() {
        let output = WikitextListRenderer.render(&abcd(), &RenderPolicy::default());

        assert_eq!(
            output,
            wrapped(&["* [[A/B|B]]", "** [[A/B/C|C]]", "* [[A/D|D]]"])
        );
    }

    #[test]
    fn test_limit_is_global_across_levels() {
        let policy = RenderPolicy {
            limit: 2,
            ..RenderPolicy::default()
        };
        let output = WikitextListRenderer.render(&abcd(), &policy);

        assert_eq!(output, wrapped(&["* [[A/B|B]]", "** [[A/B/C|C]]"]));
        assert!(!output.contains("A/D"));
    }

    #[test]
    fn test_item_count_is_min_of_limit_and_pages() {
        let page = create_test_page(&["R", "R/a", "R/a/x", "R/a/x/1", "R/b", "R/c", "R/c/y"]);
        let total = page.descendant_count();
        assert_eq!(total, 6);

        for limit in 1..=8 {
            let policy = RenderPolicy {
                limit,
                ..RenderPolicy::default()
            };
            let output = WikitextListRenderer.render(&page, &policy);
            assert_eq!(item_count(&output), limit.min(total), "limit {}", limit);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let page = abcd();
        let policy = RenderPolicy {
            sort: SortOrder::Descending,
            limit: 3,
            ..RenderPolicy::default()
        };

        let first = WikitextListRenderer.render(&page, &policy);
        let second = WikitextListRenderer.render(&page, &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_text() {
        let page = create_test_page(&["A"]);
        let policy = |default_text: &str| RenderPolicy {
            default_text: default_text.to_string(),
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&page, &policy("")),
            "A has no sub pages."
        );
        assert_eq!(WikitextListRenderer.render(&page, &policy("-")), "");
        assert_eq!(
            WikitextListRenderer.render(&page, &policy("Nothing here")),
            "Nothing here"
        );
    }

    #[test]
    fn test_default_text_uses_full_title() {
        let page = create_test_page(&["Help:Editing"]);
        assert_eq!(
            WikitextListRenderer.render(&page, &RenderPolicy::default()),
            "Help:Editing has no sub pages."
        );
    }

    #[test]
    fn test_show_top_page_without_sub_pages_renders_list() {
        let page = create_test_page(&["A"]);
        let policy = RenderPolicy {
            show_top_page: true,
            ..RenderPolicy::default()
        };

        assert_eq!(WikitextListRenderer.render(&page, &policy), wrapped(&["* [[A]]"]));
    }

    #[test]
    fn test_show_top_page_nests_sub_pages() {
        let policy = RenderPolicy {
            show_top_page: true,
            limit: 2,
            ..RenderPolicy::default()
        };

        // the top page does not count towards the limit
        assert_eq!(
            WikitextListRenderer.render(&abcd(), &policy),
            wrapped(&["* [[A]]", "** [[A/B|B]]", "*** [[A/B/C|C]]"])
        );
    }

    #[test]
    fn test_descending_sort() {
        let policy = RenderPolicy {
            sort: SortOrder::Descending,
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&abcd(), &policy),
            wrapped(&["* [[A/D|D]]", "* [[A/B|B]]", "** [[A/B/C|C]]"])
        );
    }

    #[test]
    fn test_sort_ignores_input_order() {
        let page = create_test_page(&["A", "A/Zeta", "A/Beta", "A/Alpha"]);
        let policy = RenderPolicy {
            links: false,
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&page, &policy),
            wrapped(&["* Alpha", "* Beta", "* Zeta"])
        );
    }

    #[test]
    fn test_ordered_plain_text() {
        let policy = RenderPolicy {
            format: ListFormat::Ordered,
            links: false,
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&abcd(), &policy),
            wrapped(&["# B", "## C", "# D"])
        );
    }

    #[test]
    fn test_path_style_none_renders_markers_only() {
        let policy = RenderPolicy {
            format: ListFormat::Ordered,
            path_style: PathStyle::None,
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&abcd(), &policy),
            wrapped(&["#", "##", "#"])
        );
    }

    #[test]
    fn test_path_style_page_name() {
        let policy = RenderPolicy {
            path_style: PathStyle::PageNameOnly,
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&abcd(), &policy),
            wrapped(&["* [[A/B]]", "** [[A/B/C]]", "* [[A/D]]"])
        );
    }

    #[test]
    fn test_template_overrides_links() {
        let policy = RenderPolicy {
            template: Some("Item".to_string()),
            links: true,
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&abcd(), &policy),
            wrapped(&["* {{Item|A/B|B}}", "** {{Item|A/B/C|C}}", "* {{Item|A/D|D}}"])
        );
    }

    #[test]
    fn test_kids_only_skips_pages_with_sub_pages() {
        let policy = RenderPolicy {
            kids_only: true,
            ..RenderPolicy::default()
        };
        let output = WikitextListRenderer.render(&abcd(), &policy);

        assert_eq!(output, wrapped(&["* [[A/D|D]]"]));
        assert!(!output.contains("A/B/C"));
    }

    #[test]
    fn test_kids_only_can_leave_nothing() {
        let page = create_test_page(&["A", "A/B", "A/B/C"]);
        let policy = RenderPolicy {
            kids_only: true,
            ..RenderPolicy::default()
        };

        assert_eq!(WikitextListRenderer.render(&page, &policy), "");
    }

    #[test]
    fn test_container_intro_and_outro() {
        let page = create_test_page(&["A", "A/B"]);
        let policy = RenderPolicy {
            intro: "Sub pages:".to_string(),
            outro: "(end)".to_string(),
            element: crate::Element::Span,
            class: "pages".to_string(),
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&page, &policy),
            "Sub pages:\n<span class=\"pages\">\n* [[A/B|B]]\n</span>\n(end)"
        );
    }

    #[test]
    fn test_intro_and_outro_around_empty_list() {
        let page = create_test_page(&["A", "A/B", "A/B/C"]);
        let policy = RenderPolicy {
            kids_only: true,
            intro: "Sub pages:".to_string(),
            outro: "(end)".to_string(),
            ..RenderPolicy::default()
        };

        assert_eq!(
            WikitextListRenderer.render(&page, &policy),
            "Sub pages:\n(end)"
        );
    }
}

#[cfg(test)]
mod handler_tests {
    use std::cell::RefCell;

    use anyhow::Result;

    use crate::{
        HierarchyError, InMemoryPageIndex, ListRenderer, Page, RenderPolicy, SubPageCount, SubPageFinder,
        SubPageList, SubPageListError, Title, TitleFactory, WikitextListRenderer,
        INVALID_TITLE_MESSAGE,
    };

    /// Returns the same sub pages for every title
    struct FixedFinder(Vec<&'static str>);

    impl SubPageFinder for FixedFinder {
        fn sub_pages_for(&self, _title: &Title) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct FailingFinder;

    impl SubPageFinder for FailingFinder {
        fn sub_pages_for(&self, _title: &Title) -> Result<Vec<String>> {
            Err(anyhow::anyhow!("replica unavailable"))
        }
    }

    /// Records the pages it was asked to render
    #[derive(Default)]
    struct RecordingRenderer {
        rendered: RefCell<Vec<Page>>,
    }

    impl ListRenderer for RecordingRenderer {
        fn render_list(&self, page: &Page, _policy: &RenderPolicy) -> String {
            self.rendered.borrow_mut().push(page.clone());
            "foo bar baz".to_string()
        }
    }

    #[test]
    fn test_renders_hierarchy_of_requested_page() {
        let finder = FixedFinder(vec!["A/B", "A/B/C", "A/D"]);
        let renderer = RecordingRenderer::default();
        let handler = SubPageList::new(&finder, &renderer, TitleFactory::new());

        let output = handler.handle(&["A"]).unwrap();

        assert_eq!(output, "foo bar baz");
        let rendered = renderer.rendered.borrow();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].title().full_text(), "A");
        assert_eq!(rendered[0].descendant_count(), 3);
    }

    #[test]
    fn test_no_sub_pages_uses_default_without_listing() {
        let finder = FixedFinder(vec![]);
        let renderer = RecordingRenderer::default();
        let handler = SubPageList::new(&finder, &renderer, TitleFactory::new());

        assert_eq!(handler.handle(&["A"]).unwrap(), "A has no sub pages.");
        assert_eq!(handler.handle(&["A", "default=-"]).unwrap(), "");
        assert!(renderer.rendered.borrow().is_empty());
    }

    #[test]
    fn test_invalid_title_message() {
        let finder = FixedFinder(vec![]);
        let handler = SubPageList::new(&finder, &WikitextListRenderer, TitleFactory::new());

        assert_eq!(handler.handle::<&str>(&[]).unwrap(), INVALID_TITLE_MESSAGE);
        assert_eq!(handler.handle(&["page=A[b]"]).unwrap(), INVALID_TITLE_MESSAGE);
    }

    #[test]
    fn test_multiple_roots_fail() {
        // A/X is missing, so A/X/Y cannot attach to A
        let finder = FixedFinder(vec!["A/B", "A/X/Y"]);
        let handler = SubPageList::new(&finder, &WikitextListRenderer, TitleFactory::new());

        let err = handler.handle(&["A"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SubPageListError>(),
            Some(&SubPageListError::MultipleRoots { count: 2 })
        );
    }

    #[test]
    fn test_malformed_sub_page_aborts() {
        let finder = FixedFinder(vec!["A/B", "A/B//C"]);
        let handler = SubPageList::new(&finder, &WikitextListRenderer, TitleFactory::new());

        let err = handler.handle(&["A"]).unwrap_err();
        assert!(err.downcast_ref::<HierarchyError>().is_some());
    }

    #[test]
    fn test_finder_error_propagates() {
        let handler = SubPageList::new(&FailingFinder, &WikitextListRenderer, TitleFactory::new());
        let err = handler.handle(&["A"]).unwrap_err();

        assert!(format!("{:#}", err).contains("replica unavailable"));
    }

    #[test]
    fn test_end_to_end_list() {
        let finder = FixedFinder(vec!["A/D", "A/B/C", "A/B"]);
        let handler = SubPageList::new(&finder, &WikitextListRenderer, TitleFactory::new());

        let output = handler
            .handle(&["A", "ol", "children", "links=no", "class="])
            .unwrap();
        assert_eq!(output, "<div>\n# B\n## B/C\n# D\n</div>");
    }

    #[test]
    fn test_count() {
        let finder = FixedFinder(vec!["A/B", "A/B/C", "A/D"]);
        let handler = SubPageCount::new(&finder, TitleFactory::new());

        assert_eq!(handler.handle(&["A"]).unwrap(), "3");
        assert_eq!(handler.handle(&["A", "kidsonly"]).unwrap(), "2");
        assert_eq!(handler.handle(&["page="]).unwrap(), INVALID_TITLE_MESSAGE);
    }

    #[test]
    fn test_count_agrees_with_list_on_duplicates() {
        let index = InMemoryPageIndex::new(&TitleFactory::new(), ["A", "A/B", "A/B", "A/C"]);
        let list = SubPageList::new(&index, &WikitextListRenderer, TitleFactory::new());
        let count = SubPageCount::new(&index, TitleFactory::new());

        assert_eq!(
            list.handle(&["A", "links=no", "class="]).unwrap(),
            "<div>\n* B\n* C\n</div>"
        );
        assert_eq!(count.handle(&["A"]).unwrap(), "2");
    }
}
