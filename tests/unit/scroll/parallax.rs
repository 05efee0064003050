use super::*;

fn hills() -> Vec<ParallaxLayer> {
    [("hill-top", -20.0), ("hill-green", -35.0), ("hill-bottom", -10.0)]
        .into_iter()
        .map(|(id, speed)| ParallaxLayer {
            target: TargetId::new(id),
            speed,
            ease: Ease::Linear,
        })
        .collect()
}

#[test]
fn offsets_are_linear_in_progress() {
    let mut p = Parallax::new(hills(), None);
    p.set_progress(0.5);
    let offsets = p.offsets();
    assert_eq!(offsets[0], (TargetId::new("hill-top"), -10.0));
    assert_eq!(offsets[1].1, -17.5);
    assert_eq!(offsets[2].1, -5.0);

    p.set_progress(2.0);
    assert_eq!(p.offsets()[1].1, -35.0);
}

#[test]
fn scrub_lags_then_converges() {
    let mut p = Parallax::new(hills(), Some(1.2));
    p.set_progress(1.0);
    assert_eq!(p.progress(), 0.0);

    p.advance(0.1);
    let first = p.progress();
    assert!(first > 0.0 && first < 1.0);

    for _ in 0..600 {
        p.advance(0.1);
    }
    assert_eq!(p.progress(), 1.0);
}

#[test]
fn invalid_scrub_means_immediate() {
    let mut p = Parallax::new(hills(), Some(-1.0));
    p.set_progress(0.25);
    assert_eq!(p.progress(), 0.25);
}
