use super::*;

#[test]
fn progress_is_ratio_of_scrollable_height() {
    let vp = Viewport::new(250.0, 800.0, 1800.0);
    assert_eq!(vp.scrollable_height(), 1000.0);
    assert_eq!(vp.progress(), ScrollProgress(0.25));
}

#[test]
fn single_screen_content_pins_progress_to_zero() {
    for content in [800.0, 600.0, 0.0] {
        let vp = Viewport::new(120.0, 800.0, content);
        assert_eq!(ScrollProgress::from_viewport(vp), ScrollProgress::START);
    }
}

#[test]
fn overscroll_is_not_clamped_on_derivation() {
    let vp = Viewport::new(1100.0, 800.0, 1800.0);
    assert!(vp.progress().get() > 1.0);

    let vp = Viewport::new(-50.0, 800.0, 1800.0);
    assert!(vp.progress().get() < 0.0);
}
