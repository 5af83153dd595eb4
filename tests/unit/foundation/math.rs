use super::*;

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..100 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_f64_01_stays_in_unit_interval() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn range_respects_bounds() {
    let mut rng = Rng64::new(3);
    for _ in 0..1000 {
        let v = rng.range(-2.0, 2.0);
        assert!((-2.0..2.0).contains(&v));
    }
}

#[test]
fn index_never_reaches_len() {
    let mut rng = Rng64::new(11);
    for _ in 0..1000 {
        assert!(rng.index(3) < 3);
    }
    assert_eq!(rng.index(1), 0);
}

#[test]
fn range_i32_is_inclusive_and_bounded() {
    let mut rng = Rng64::new(5);
    let mut seen = [false; 3];
    for _ in 0..1000 {
        let v = rng.range_i32(3, 5);
        assert!((3..=5).contains(&v));
        seen[(v - 3) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
}
