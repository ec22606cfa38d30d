use super::*;

#[test]
fn clamps_outside_window() {
    for t in [-1.0, 0.0, 0.1, 0.25] {
        assert_eq!(segment_progress(t, 0.25, 0.55), 0.0);
    }
    for t in [0.55, 0.6, 1.0, 4.0] {
        assert_eq!(segment_progress(t, 0.25, 0.55), 1.0);
    }
}

#[test]
fn linear_inside_window() {
    let v = segment_progress(0.3, 0.25, 0.55);
    assert_eq!(v, (0.3 - 0.25) / (0.55 - 0.25));
    assert!((v - 0.1667).abs() < 1e-4);
}

#[test]
fn monotonic_non_decreasing() {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=200 {
        let t = -0.5 + f64::from(i) * 0.01;
        let v = Segment::SKY.progress(t);
        assert!(v >= prev, "t={t} v={v} prev={prev}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn continuous_at_boundaries() {
    let eps = 1e-9;
    for seg in [
        Segment::FALL,
        Segment::BLACK_FADE,
        Segment::ATMOSPHERE_IN,
        Segment::ATMOSPHERE_OUT,
        Segment::SKY,
        Segment::HILL,
        Segment::CAPTION,
        Segment::TITLE,
    ] {
        assert!(seg.progress(seg.start + eps) < 1e-6);
        assert!(seg.progress(seg.end - eps) > 1.0 - 1e-6);
    }
}

#[test]
fn remaining_mirrors_progress() {
    assert_eq!(Segment::TITLE.remaining(0.0), 1.0);
    assert_eq!(Segment::TITLE.remaining(0.4), 0.0);
    assert_eq!(
        Segment::TITLE.remaining(0.2),
        1.0 - Segment::TITLE.progress(0.2)
    );
}
