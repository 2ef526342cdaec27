use super::*;

#[test]
fn default_body_has_twelve_parts_tail_first() {
    let segs = animate_body(&BodyConfig::default());
    assert_eq!(segs.len(), 12);
    assert_eq!(segs.first().unwrap().index, 11);
    assert_eq!(segs.last().unwrap().index, 0);

    let head = segs.last().unwrap();
    assert_eq!(head.opacity, 1.0);
    assert_eq!(head.lag_secs, 0.0);
    assert_eq!(head.color, BodyConfig::default().head_color);

    let tail = segs.first().unwrap();
    assert_eq!(tail.color, BodyConfig::default().tail_color);
    assert!((tail.lag_secs - 11.0 * 0.07).abs() < 1e-12);
}

#[test]
fn opacity_decreases_towards_the_tail_with_a_floor() {
    let segs = animate_body(&BodyConfig::default());
    let head_to_tail: Vec<_> = segs.iter().rev().collect();
    for pair in head_to_tail.windows(2) {
        assert!(pair[0].opacity >= pair[1].opacity);
        assert!(pair[0].lag_secs < pair[1].lag_secs);
    }
    assert!(segs.iter().all(|s| s.opacity >= 0.4 && s.opacity <= 1.0));
    // 1 - 11/12 is below the floor
    assert_eq!(segs[0].opacity, 0.4);
    assert!((head_to_tail[3].opacity - 0.75).abs() < 1e-12);
}

#[test]
fn single_part_body_is_just_the_head() {
    let body = BodyConfig {
        length: 1,
        ..BodyConfig::default()
    };
    let segs = animate_body(&body);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].index, 0);
    assert_eq!(segs[0].opacity, 1.0);
    assert_eq!(segs[0].color, body.head_color);
}

#[test]
fn empty_body_yields_nothing() {
    let body = BodyConfig {
        length: 0,
        ..BodyConfig::default()
    };
    assert!(animate_body(&body).is_empty());
}
