use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(Ease::OutCubic.apply(0.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(1.0), 1.0);
}

#[test]
fn monotonic_spot_check() {
    let a = Ease::OutCubic.apply(0.25);
    let b = Ease::OutCubic.apply(0.5);
    let c = Ease::OutCubic.apply(0.75);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn out_cubic_decelerates() {
    // Ease-out covers more than half the distance in the first half.
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
    assert!(Ease::OutCubic.apply(0.5) > 0.5);
}

#[test]
fn out_cubic_bit_patterns_are_pinned() {
    for (t, bits) in [
        (0.1, 0x3fd1_5810_624d_d2f0_u64),
        (0.3, 0x3fe5_0624_dd2f_1aa0),
        (0.7, 0x3fef_22d0_e560_4189),
        (0.25, 0x3fe2_8000_0000_0000),
        (0.5, 0x3fec_0000_0000_0000),
    ] {
        assert_eq!(Ease::OutCubic.apply(t).to_bits(), bits, "t={t}");
    }
}

#[test]
fn input_outside_unit_range_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.5), 1.0);
}
