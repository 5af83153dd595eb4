use super::*;

#[test]
fn all_curves_hit_exact_endpoints() {
    for ease in [Ease::Linear, Ease::InQuad, Ease::OutQuad, Ease::SmoothStep] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(2.0), 1.0);
}

#[test]
fn midpoint_values() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::InQuad.apply(0.5), 0.25);
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::SmoothStep.apply(0.5), 0.5);
}

#[test]
fn smoothstep_has_flat_ends() {
    // Near-zero slope at both ends compared to linear.
    assert!(Ease::SmoothStep.apply(0.05) < 0.05);
    assert!(Ease::SmoothStep.apply(0.95) > 0.95);
}
