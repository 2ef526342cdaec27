use super::*;
use crate::activity::model::ContributionDay;
use crate::engine::snake::SnakeEngine;
use crate::foundation::core::CellKey;
use crate::foundation::random::ScriptedSource;

fn animation(username: &str, active: &[CellKey]) -> SnakeAnimation {
    let mut days = vec![ContributionDay::new("", 0, 0); 371];
    for k in active {
        days[k.day_index(7)] = ContributionDay::new("", 4, 2);
    }
    SnakeEngine::generate(
        username,
        &days,
        &EngineConfig::default(),
        &mut ScriptedSource::zeros(),
    )
    .unwrap()
}

#[test]
fn document_has_canvas_label_cells_and_body() {
    let anim = animation("octocat", &[CellKey::new(0, 0), CellKey::new(4, 2)]);
    let svg = render_svg(&anim, &EngineConfig::default()).unwrap();

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 706 128""#));
    assert!(svg.contains(">@octocat</text>"));
    assert_eq!(svg.matches("<rect ").count(), 1 + 371 + 12);
    assert_eq!(svg.matches(r#"attributeName="opacity""#).count(), 2);
    assert_eq!(svg.matches("<animateMotion ").count(), 12);
}

#[test]
fn single_cell_keyframes_use_trigger_and_finish() {
    let anim = animation("u", &[CellKey::new(0, 0)]);
    let svg = render_svg(&anim, &EngineConfig::default()).unwrap();
    assert!(svg.contains(r#"keyTimes="0;0.00894;0.00994;1""#), "{svg}");
    assert!(svg.contains(r#"dur="9.145455s""#));
    assert!(svg.contains(&format!(r#"<animateMotion path="{}""#, anim.path.svg_path_data())));
}

#[test]
fn body_is_written_tail_first() {
    let anim = animation("u", &[CellKey::new(0, 0)]);
    let svg = render_svg(&anim, &EngineConfig::default()).unwrap();
    let tail = svg.find(r#"begin="0.77s""#).unwrap();
    let head = svg.find(r#"begin="0s""#).unwrap();
    assert!(tail < head);
}

#[test]
fn fallback_document_still_animates_the_body() {
    let anim = animation("u", &[]);
    let svg = render_svg(&anim, &EngineConfig::default()).unwrap();
    assert_eq!(svg.matches(r#"attributeName="opacity""#).count(), 0);
    assert_eq!(svg.matches("<animateMotion ").count(), 12);
    assert!(svg.contains(r#"dur="20s""#));
}

#[test]
fn username_is_escaped() {
    let anim = animation("<a&b>", &[]);
    let svg = render_svg(&anim, &EngineConfig::default()).unwrap();
    assert!(svg.contains("@&lt;a&amp;b&gt;"));
}

#[test]
fn light_theme_changes_the_background() {
    let cfg = EngineConfig {
        theme: crate::config::engine::Theme::Light,
        ..EngineConfig::default()
    };
    let anim = animation("u", &[]);
    let svg = render_svg(&anim, &cfg).unwrap();
    assert!(svg.contains(r##"fill="#ffffff""##));
}

#[test]
fn output_parses_as_svg() {
    let anim = animation("u", &[CellKey::new(3, 3), CellKey::new(10, 1)]);
    let svg = render_svg(&anim, &EngineConfig::default()).unwrap();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 706.0);
    assert_eq!(tree.size().height(), 128.0);
}

#[test]
fn numbers_are_compact() {
    assert_eq!(num(5.0), "5");
    assert_eq!(num(0.25), "0.25");
    assert_eq!(num(-4.0), "-4");
    assert_eq!(num(-0.0000001), "0");
    assert_eq!(num(1.0 / 3.0), "0.333333");
}
