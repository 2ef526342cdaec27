use super::*;

fn hits(entries: &[(CellKey, f64)]) -> HitRecord {
    let mut h = HitRecord::new();
    for &(k, d) in entries {
        h.record(k, d);
    }
    h
}

#[test]
fn duration_is_distance_over_speed_with_a_floor() {
    let timing = TimingConfig::default();
    let t = synthesize_timeline(&HitRecord::new(), 1100.0, &timing);
    assert!((t.total_duration - 10.0).abs() < 1e-12);

    let t = synthesize_timeline(&HitRecord::new(), 220.0, &timing);
    assert_eq!(t.total_duration, 5.0);
}

#[test]
fn window_opens_just_before_arrival() {
    let timing = TimingConfig::default();
    let k = CellKey::new(0, 0);
    let t = synthesize_timeline(&hits(&[(k, 10.0)]), 1006.0, &timing);
    let w = t.get(k).unwrap();
    let expected = 10.0 / 1006.0 - 0.001;
    assert!((w.trigger - expected).abs() < 1e-12);
    assert!((w.finish - (expected + 0.001)).abs() < 1e-12);
}

#[test]
fn window_at_path_start_is_clamped_to_zero() {
    let timing = TimingConfig::default();
    let k = CellKey::new(0, 0);
    let t = synthesize_timeline(&hits(&[(k, 0.0)]), 500.0, &timing);
    let w = t.get(k).unwrap();
    assert_eq!(w.trigger, 0.0);
    assert_eq!(w.finish, 0.001);
}

#[test]
fn late_arrivals_are_capped_below_the_ceiling() {
    let timing = TimingConfig::default();
    let k = CellKey::new(52, 6);
    let t = synthesize_timeline(&hits(&[(k, 990.0)]), 1000.0, &timing);
    let w = t.get(k).unwrap();
    assert_eq!(w.finish, 0.95);
    assert!((w.trigger - (0.95 - TRIGGER_PULL_EPSILON)).abs() < 1e-12);
    assert!(w.trigger < w.finish);
}

#[test]
fn every_window_is_well_formed() {
    let timing = TimingConfig::default();
    let total = 2000.0;
    let entries: Vec<_> = (0..200)
        .map(|i| (CellKey::new(i / 7, i % 7), f64::from(i) * 10.0))
        .collect();
    let t = synthesize_timeline(&hits(&entries), total, &timing);
    assert_eq!(t.len(), 200);
    for (_, w) in t.iter() {
        assert!(w.trigger >= 0.0 && w.trigger < 1.0);
        assert!(w.finish > 0.0 && w.finish <= 0.95);
        assert!(w.trigger < w.finish);
    }
}

#[test]
fn zero_distance_maps_arrivals_to_the_start() {
    let timing = TimingConfig::default();
    let k = CellKey::new(1, 1);
    let t = synthesize_timeline(&hits(&[(k, 0.0)]), 0.0, &timing);
    assert_eq!(t.get(k).unwrap().trigger, 0.0);
    assert_eq!(t.total_duration, 5.0);
}

#[test]
fn fallback_uses_the_fixed_duration() {
    let t = fallback_timeline(1006.0, &TimingConfig::default());
    assert_eq!(t.total_duration, 20.0);
    assert!(t.is_empty());
}
