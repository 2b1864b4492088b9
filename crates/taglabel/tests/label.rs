//! Label lifecycle: rebuilds, styling, configuration and hit testing.

mod common;

use common::{Fired, GridLayout, Recorder, logger};
use rstest::rstest;
use taglabel::{
    AttributeRun, ColorPalette, HASH_ATTRIBUTE, LabelConfig, MENTION_ATTRIBUTE, PatternCategory,
    PatternKind, Point, Rgba, StyledText, TEXT_COLOR_ATTRIBUTE, TagLabel,
};

#[rstest]
fn rebuilding_the_same_text_is_stable(_logger: ()) {
    let mut label = TagLabel::default();
    label.set_text("#a @b https://c.io");
    let first = (label.span_index().clone(), label.styled_text().clone());
    label.set_text("#a @b https://c.io");
    assert_eq!((label.span_index().clone(), label.styled_text().clone()), first);
}

#[rstest]
fn batched_edits_apply_together(_logger: ()) {
    let mut label = TagLabel::default();
    label.set_text("#old");
    label.edit(|label| {
        label.set_enabled_categories(vec![PatternCategory::Mention]);
        label.set_text("@new #tag");
        assert!(label.span_index().get("@new").is_none());
    });
    assert!(label.span_index().get("@new").is_some());
    assert!(label.span_index().get("#tag").is_none());
    assert!(label.span_index().get("#old").is_none());
}

#[rstest]
fn styled_runs_survive_until_categories_change(_logger: ()) {
    let mut label = TagLabel::default();
    label.set_styled_text(
        StyledText::new("bold #move").with_run(AttributeRun::new(0, 4, "bold", "true")),
    );
    assert_eq!(label.styled_text().runs_named("bold").count(), 1);
    assert_eq!(label.styled_text().runs_named(HASH_ATTRIBUTE).count(), 1);

    label.set_enabled_categories(PatternCategory::defaults());
    assert_eq!(label.styled_text().runs_named("bold").count(), 0);
    assert_eq!(label.styled_text().runs_named(HASH_ATTRIBUTE).count(), 1);
}

#[rstest]
fn recoloring_is_per_label(_logger: ()) {
    let red = Rgba::rgb(200, 0, 0);
    let mut first = TagLabel::default();
    let mut second = TagLabel::default();
    first.set_text("@one");
    second.set_text("@two");

    first.set_color(PatternKind::Mention, red);

    assert_eq!(first.palette().mention, red);
    assert!(
        first
            .styled_text()
            .runs_named(MENTION_ATTRIBUTE)
            .all(|run| run.color == Some(red))
    );
    assert_eq!(second.palette(), &ColorPalette::default());
    assert!(
        second
            .styled_text()
            .runs_named(MENTION_ATTRIBUTE)
            .all(|run| run.color == Some(ColorPalette::default().mention))
    );
}

#[rstest]
fn new_colors_apply_to_later_rebuilds(_logger: ()) {
    let teal = Rgba::rgb(0, 128, 128);
    let mut label = TagLabel::default();
    label.set_color(PatternKind::Hash, teal);
    label.set_text("#later");
    assert!(
        label
            .styled_text()
            .runs_named(HASH_ATTRIBUTE)
            .all(|run| run.color == Some(teal))
    );
}

#[rstest]
fn taps_are_translated_by_the_text_origin(_logger: ()) {
    let mut label = TagLabel::default();
    label.set_text("go #now");
    label.set_text_origin(Point::new(20.0, 4.0));
    let layout = GridLayout {
        cell_width: 10.0,
        line_height: 16.0,
        len: 7,
    };
    let recorder = Recorder::default();

    label.handle_tap(Point::new(75.0, 10.0), &layout, &mut recorder.handlers());
    assert_eq!(
        recorder.take(),
        vec![
            Fired::LabelTapped,
            Fired::Selected("#now".into(), PatternKind::Hash),
            Fired::Hashtag("#now".into()),
        ]
    );

    label.handle_tap(Point::new(5.0, 10.0), &layout, &mut recorder.handlers());
    assert_eq!(recorder.take(), vec![Fired::LabelTapped]);
}

#[rstest]
fn invalid_custom_pattern_is_rejected_up_front(_logger: ()) {
    let mut label = TagLabel::default();
    assert!(label.add_custom_pattern("(unclosed").is_err());
    assert_eq!(label.enabled_categories(), PatternCategory::defaults().as_slice());
}

#[rstest]
fn configured_invalid_pattern_never_matches(_logger: ()) {
    let mut label = TagLabel::new(LabelConfig {
        enabled: vec![PatternCategory::custom("(oops"), PatternCategory::Hash],
        ..LabelConfig::default()
    });
    label.set_text("(oops #fine");
    assert_eq!(label.span_index().len(), 1);
    assert!(label.span_index().get("#fine").is_some());
}

#[rstest]
fn scan_cap_leaves_long_text_plain(_logger: ()) {
    let mut label = TagLabel::new(LabelConfig {
        max_scan_len: Some(8),
        ..LabelConfig::default()
    });
    label.set_text("#short");
    assert_eq!(label.span_index().len(), 1);
    label.set_text("#much-longer-text");
    assert!(label.span_index().is_empty());
    let names: Vec<_> = label
        .styled_text()
        .runs()
        .iter()
        .map(|run| run.name.as_str())
        .collect();
    assert_eq!(names, vec![TEXT_COLOR_ATTRIBUTE]);
}

#[rstest]
fn configured_text_color_covers_the_text(_logger: ()) {
    let ink = Rgba::rgb(1, 2, 3);
    let mut label = TagLabel::new(LabelConfig {
        palette: ColorPalette {
            text: ink,
            ..ColorPalette::default()
        },
        ..LabelConfig::default()
    });
    label.set_text("plain #tag");
    let base: Vec<_> = label
        .styled_text()
        .runs_named(TEXT_COLOR_ATTRIBUTE)
        .map(|run| (run.start, run.length, run.color))
        .collect();
    assert_eq!(base, vec![(0, 10, Some(ink))]);
}

#[rstest]
fn text_color_changes_recolor_and_persist(_logger: ()) {
    let ink = Rgba::rgb(9, 9, 9);
    let mut label = TagLabel::default();
    label.set_text("@a");
    label.set_text_color(ink);
    assert_eq!(label.palette().text, ink);
    assert!(
        label
            .styled_text()
            .runs_named(TEXT_COLOR_ATTRIBUTE)
            .all(|run| run.color == Some(ink))
    );
    assert!(
        label
            .styled_text()
            .runs_named(MENTION_ATTRIBUTE)
            .all(|run| run.color == Some(ColorPalette::default().mention))
    );

    label.set_text("@b later");
    assert!(
        label
            .styled_text()
            .runs_named(TEXT_COLOR_ATTRIBUTE)
            .all(|run| run.color == Some(ink))
    );
}

#[cfg(feature = "serde")]
#[rstest]
fn label_from_json_config(_logger: ()) {
    let document = r#"{
        "enabled": ["mention", {"custom": "\\$\\d+"}],
        "palette": {"mention": {"red": 1, "green": 2, "blue": 3, "alpha": 255}}
    }"#;
    let config = match LabelConfig::from_json(document) {
        Ok(config) => config,
        Err(err) => panic!("config should parse: {err}"),
    };
    assert_eq!(config.palette.hash, ColorPalette::default().hash);

    let mut label = TagLabel::new(config);
    label.set_text("@pay $20");
    assert_eq!(label.palette().mention, Rgba::rgb(1, 2, 3));
    assert!(label.span_index().get("@pay").is_some());
    assert!(label.span_index().get("$20").is_some());
}

#[cfg(feature = "serde")]
#[rstest]
fn json_config_rejects_bad_patterns(_logger: ()) {
    let result = LabelConfig::from_json(r#"{"enabled": [{"custom": "["}]}"#);
    assert!(matches!(result, Err(taglabel::ConfigError::Pattern { .. })));
}
