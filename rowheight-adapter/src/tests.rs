use crate::*;

use rowheight::{Height, IndexPath, ListEdit};

use std::string::String;
use std::vec::Vec;

/// A synthetic text-row measurer: height = configured line count * line height.
#[derive(Debug, Default)]
struct TextMeasurer {
    created: Vec<String>,
    measure_calls: usize,
    fail_next: bool,
}

struct TextTemplate {
    lines: usize,
}

#[derive(Debug, PartialEq, Eq)]
struct LayoutFailed;

impl TemplateMeasurer for TextMeasurer {
    type Template = TextTemplate;
    type Error = LayoutFailed;

    fn create_template(&mut self, identifier: &str) -> Result<TextTemplate, LayoutFailed> {
        self.created.push(String::from(identifier));
        Ok(TextTemplate { lines: 0 })
    }

    fn measure(&mut self, template: &mut TextTemplate) -> Result<Height, LayoutFailed> {
        if self.fail_next {
            self.fail_next = false;
            return Err(LayoutFailed);
        }
        self.measure_calls += 1;
        Ok(template.lines as Height * 20.0)
    }
}

type Resolver = HeightResolver<TextMeasurer, u64>;

#[test]
fn measures_once_per_index_path() {
    let mut resolver = Resolver::new(TextMeasurer::default());
    let path = IndexPath::new(0, 0);

    let height = resolver
        .height_for_index_path("cell", path, |t| t.lines = 3)
        .unwrap();
    assert_eq!(height, 60.0);

    // Cache hit: the second configure (with different content) is never consulted.
    let again = resolver
        .height_for_index_path("cell", path, |t| t.lines = 99)
        .unwrap();
    assert_eq!(again, 60.0);

    assert_eq!(resolver.measurer().measure_calls, 1);
    assert_eq!(resolver.measurer().created, ["cell"]);
}

#[test]
fn configure_is_skipped_on_cache_hit() {
    let mut resolver = Resolver::new(TextMeasurer::default());
    let path = IndexPath::new(1, 2);

    let mut configured = 0;
    for _ in 0..3 {
        resolver
            .height_for_index_path("cell", path, |t| {
                configured += 1;
                t.lines = 2;
            })
            .unwrap();
    }
    assert_eq!(configured, 1);
}

#[test]
fn one_template_per_reuse_identifier() {
    let mut resolver = Resolver::new(TextMeasurer::default());

    assert_eq!(resolver.height_for("cell", |t| t.lines = 1).unwrap(), 20.0);
    assert_eq!(resolver.height_for("cell", |t| t.lines = 2).unwrap(), 40.0);
    assert_eq!(
        resolver.height_for("header", |t| t.lines = 1).unwrap(),
        20.0
    );

    assert_eq!(resolver.measurer().created, ["cell", "header"]);
    // `height_for` never caches: every call laid out a template.
    assert_eq!(resolver.measurer().measure_calls, 3);

    let template = resolver.template("cell").unwrap();
    assert_eq!(template.lines, 2);
}

#[test]
fn keyed_heights_survive_until_invalidated() {
    let mut resolver = HeightResolver::new(TextMeasurer::default());

    let height = resolver
        .height_for_key("cell", 7u64, |t| t.lines = 2)
        .unwrap();
    assert_eq!(height, 40.0);

    let cached = resolver
        .height_for_key("cell", 7u64, |t| t.lines = 9)
        .unwrap();
    assert_eq!(cached, 40.0);
    assert_eq!(resolver.measurer().measure_calls, 1);

    assert_eq!(resolver.invalidate_key(&7), Some(40.0));
    let remeasured = resolver
        .height_for_key("cell", 7u64, |t| t.lines = 9)
        .unwrap();
    assert_eq!(remeasured, 180.0);
    assert_eq!(resolver.measurer().measure_calls, 2);
}

#[test]
fn measurement_errors_pass_through_and_are_not_cached() {
    let mut resolver = Resolver::new(TextMeasurer::default());
    let path = IndexPath::new(0, 0);

    resolver.measurer_mut().fail_next = true;
    let failed = resolver.height_for_index_path("cell", path, |t| t.lines = 1);
    assert_eq!(failed, Err(LayoutFailed));
    assert!(!resolver.index_path_cache().exists(path));

    // The next lookup retries.
    let height = resolver
        .height_for_index_path("cell", path, |t| t.lines = 1)
        .unwrap();
    assert_eq!(height, 20.0);
    assert!(resolver.index_path_cache().exists(path));
}

#[test]
fn structural_edits_keep_positional_entries_aligned() {
    let mut resolver = Resolver::new(TextMeasurer::default());
    for row in 0..3 {
        resolver
            .height_for_index_path("cell", IndexPath::new(0, row), |t| t.lines = row + 1)
            .unwrap();
    }

    resolver.apply_edit(&ListEdit::InsertRows([IndexPath::new(0, 1)].into()));

    let cache = resolver.index_path_cache();
    assert_eq!(cache.height(IndexPath::new(0, 0)), Some(20.0));
    assert!(!cache.exists(IndexPath::new(0, 1)));
    assert_eq!(cache.height(IndexPath::new(0, 2)), Some(40.0));
    assert_eq!(cache.height(IndexPath::new(0, 3)), Some(60.0));

    // The inserted hole measures on its next lookup; neighbors stay cached.
    let height = resolver
        .height_for_index_path("cell", IndexPath::new(0, 1), |t| t.lines = 5)
        .unwrap();
    assert_eq!(height, 100.0);
    assert_eq!(resolver.measurer().measure_calls, 4);

    // Positional edits leave keyed entries alone.
    resolver
        .height_for_key("cell", 42u64, |t| t.lines = 1)
        .unwrap();
    resolver.apply_edits(&[
        ListEdit::DeleteSection(0),
        ListEdit::InsertSection(0),
    ]);
    assert_eq!(resolver.key_cache().height(&42), Some(20.0));
}

#[test]
fn reload_data_clears_caches_but_keeps_templates() {
    let mut resolver = Resolver::new(TextMeasurer::default());
    resolver
        .height_for_index_path("cell", IndexPath::new(0, 0), |t| t.lines = 1)
        .unwrap();
    resolver
        .height_for_key("cell", 1u64, |t| t.lines = 2)
        .unwrap();

    resolver.apply_edit(&ListEdit::ReloadData);

    assert!(resolver.index_path_cache().is_empty());
    assert!(resolver.key_cache().is_empty());

    // Reuse identifiers outlive the reload: no new template is created.
    resolver
        .height_for_index_path("cell", IndexPath::new(0, 0), |t| t.lines = 1)
        .unwrap();
    assert_eq!(resolver.measurer().created.len(), 1);
}
