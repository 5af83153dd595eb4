use super::*;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// 12x12 white canvas with a 2x2 black ink blob at (10, 10).
fn ink_source() -> Bitmap {
    let mut img = RgbImage::from_pixel(12, 12, Rgb([255, 255, 255]));
    for (x, y) in [(10, 10), (10, 11), (11, 10), (11, 11)] {
        img.put_pixel(x, y, Rgb([0, 0, 0]));
    }
    Bitmap::from(img)
}

/// 52x52 transparent image with a 2x2 opaque white blob at (50, 50).
fn shape_target() -> Bitmap {
    let mut img = RgbaImage::from_pixel(52, 52, Rgba([0, 0, 0, 0]));
    for (x, y) in [(50, 50), (50, 51), (51, 50), (51, 51)] {
        img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
    }
    Bitmap::from(img)
}

fn animator() -> Animator {
    Animator::new(MorphConfig::default())
}

#[test]
fn config_defaults_match_the_engine_contract() {
    let config = MorphConfig::default();
    assert_eq!(config.duration_secs, 25.0);
    assert_eq!(config.gravity, 150.0);
    assert_eq!(config.friction, 0.95);
    assert_eq!(config.source_stride, None);
}

#[test]
fn config_roundtrips_through_json() {
    let config = MorphConfig {
        duration_secs: 3.0,
        source_stride: Some(4),
        seed: 7,
        ..MorphConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: MorphConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.duration_secs, 3.0);
    assert_eq!(back.source_stride, Some(4));
    assert_eq!(back.seed, 7);
}

#[test]
fn start_builds_particles_and_resets_state() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );

    assert_eq!(animator.particles().len(), 4);
    assert_eq!(animator.progress(), 0.0);
    assert!(!animator.is_finished());
    assert_eq!(animator.kind(), MorphKind::PixelMorph);
}

#[test]
fn restart_discards_the_previous_run() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::SandFall,
    );
    animator.update(1.0);

    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::WaveTransform,
    );
    assert_eq!(animator.progress(), 0.0);
    assert_eq!(animator.particles().len(), 4);
    assert_eq!(animator.kind(), MorphKind::WaveTransform);
}

#[test]
fn empty_source_degrades_to_zero_particles() {
    // All-white canvas: nothing qualifies as ink.
    let blank = Bitmap::from(RgbImage::from_pixel(8, 8, Rgb([255, 255, 255])));
    let mut animator = animator();
    animator.start(
        &blank,
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );
    assert!(animator.particles().is_empty());
    assert!(!animator.is_finished());

    // The run still completes on schedule with nothing drawn.
    animator.set_duration(1.0).unwrap();
    animator.update(1.0);
    assert!(animator.is_finished());

    let mut frame = Frame::new(64, 64);
    animator.render(&mut frame);
}

#[test]
fn empty_target_degrades_to_zero_particles() {
    let blank = Bitmap::from(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &blank,
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );
    assert!(animator.particles().is_empty());
}

#[test]
fn progress_is_monotonic_and_clamps_at_one() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::WaveTransform,
    );
    animator.set_duration(1.0).unwrap();

    let mut last = 0.0;
    for _ in 0..20 {
        animator.update(0.1);
        assert!(animator.progress() >= last);
        last = animator.progress();
    }
    assert_eq!(animator.progress(), 1.0);
    assert!(animator.is_finished());
}

#[test]
fn finish_lands_in_the_same_tick_as_the_clamp() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );
    animator.set_duration(1.0).unwrap();

    animator.update(0.9);
    assert!(!animator.is_finished());
    animator.update(0.2);
    assert_eq!(animator.progress(), 1.0);
    assert!(animator.is_finished());
}

#[test]
fn update_is_a_noop_once_finished() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );
    animator.set_duration(1.0).unwrap();
    animator.update(2.0);

    let positions: Vec<Point> = animator.particles().iter().map(|p| p.current).collect();
    animator.update(1.0);
    let after: Vec<Point> = animator.particles().iter().map(|p| p.current).collect();
    assert_eq!(positions, after);
}

#[test]
fn colors_converge_to_target_at_completion() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::SandFall,
    );
    animator.set_duration(1.0).unwrap();
    animator.update(1.0);

    for p in animator.particles() {
        assert_eq!(p.color, p.target_color);
    }
}

#[test]
fn pixel_morph_end_to_end_occupies_every_target() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );
    animator.set_duration(1.0).unwrap();
    animator.update(1.0);

    assert_eq!(animator.progress(), 1.0);
    assert!(animator.is_finished());

    let mut occupied: Vec<(i64, i64)> = animator
        .particles()
        .iter()
        .map(|p| (p.current.x as i64, p.current.y as i64))
        .collect();
    occupied.sort();
    assert_eq!(occupied, vec![(50, 50), (50, 51), (51, 50), (51, 51)]);

    for p in animator.particles() {
        assert_eq!(p.current, p.target);
    }
}

#[test]
fn swirl_center_derives_from_source_bounds() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::new(100.0, 200.0),
        Point::ZERO,
        MorphKind::ParticleSwirl,
    );
    assert_eq!(animator.center, Point::new(106.0, 206.0));
}

#[test]
fn same_seed_reproduces_the_same_particle_set() {
    let mut a = Animator::new(MorphConfig {
        seed: 99,
        ..MorphConfig::default()
    });
    let mut b = Animator::new(MorphConfig {
        seed: 99,
        ..MorphConfig::default()
    });
    a.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::SandFall,
    );
    b.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::SandFall,
    );

    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.start, pb.start);
        assert_eq!(pa.velocity, pb.velocity);
        assert_eq!(pa.fall_delay, pb.fall_delay);
        assert_eq!(pa.size, pb.size);
    }
}

#[test]
fn set_duration_rejects_nonpositive_values() {
    let mut animator = animator();
    assert!(animator.set_duration(0.0).is_err());
    assert!(animator.set_duration(-1.0).is_err());
    assert!(animator.set_duration(f64::NAN).is_err());
    assert!(animator.set_duration(3.0).is_ok());
}

#[test]
fn render_draws_particles_onto_the_frame() {
    let mut animator = animator();
    animator.start(
        &ink_source(),
        &shape_target(),
        Point::ZERO,
        Point::ZERO,
        MorphKind::PixelMorph,
    );
    animator.set_duration(1.0).unwrap();
    animator.update(1.0);

    let mut frame = Frame::new(64, 64);
    animator.render(&mut frame);
    // Converged particles draw opaque target-color pixels.
    assert_eq!(frame.get(50, 50)[3], 255);
}
