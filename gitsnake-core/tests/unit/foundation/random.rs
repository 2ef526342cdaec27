use super::*;
use rand::SeedableRng;

#[test]
fn scripted_source_cycles_values() {
    let mut src = ScriptedSource::new(vec![0.25, 0.5]);
    assert_eq!(src.next_unit(), 0.25);
    assert_eq!(src.next_unit(), 0.5);
    assert_eq!(src.next_unit(), 0.25);
}

#[test]
fn scripted_source_keeps_draws_below_one() {
    let mut src = ScriptedSource::new(vec![1.0, -3.0]);
    assert!(src.next_unit() < 1.0);
    assert_eq!(src.next_unit(), 0.0);
}

#[test]
fn next_index_stays_in_inclusive_range() {
    let mut src = ScriptedSource::new(vec![0.0, 0.5, 0.999_999]);
    assert_eq!(src.next_index(4), 0);
    assert_eq!(src.next_index(4), 2);
    assert_eq!(src.next_index(4), 4);
    assert_eq!(src.next_index(0), 0);
}

#[test]
fn seeded_rng_is_a_random_source() {
    let mut a = rand::rngs::StdRng::seed_from_u64(7);
    let mut b = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..16 {
        let x = a.next_unit();
        assert!((0.0..1.0).contains(&x));
        assert_eq!(x, b.next_unit());
    }
}
