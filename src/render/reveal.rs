use std::collections::HashSet;

use kurbo::Point;

use crate::animation::ease::Ease;
use crate::animation::particle::Particle;
use crate::assets::bitmap::Bitmap;
use crate::foundation::core::Frame;
use crate::render::composite::{over, premul};

/// Overall progress before which no target pixels are revealed.
pub const REVEAL_START: f64 = 0.3;

/// Map overall progress to reveal progress: zero until [`REVEAL_START`],
/// then quadratically eased to 1.0 at the end of the run.
pub fn reveal_progress(progress: f64) -> f64 {
    if progress <= REVEAL_START {
        return 0.0;
    }
    Ease::InQuad.apply((progress - REVEAL_START) / (1.0 - REVEAL_START))
}

/// Target-image pixels to composite at the given reveal progress.
///
/// Each particle within the shrinking `50 * (1 - reveal_progress)` distance
/// of its target marks a disk of radius `round(2 + 3 * reveal_progress)`
/// around its position relative to the target bitmap's origin. The set
/// deduplicates overlapping disks.
pub fn revealed_pixels(
    particles: &[Particle],
    reveal_progress: f64,
    target: &Bitmap,
    target_origin: Point,
) -> HashSet<(u32, u32)> {
    let mut revealed = HashSet::new();
    if reveal_progress <= 0.0 {
        return revealed;
    }

    let width = i64::from(target.width());
    let height = i64::from(target.height());
    let max_distance = 50.0 * (1.0 - reveal_progress);
    let radius = (2.0 + 3.0 * reveal_progress).round() as i64;

    for particle in particles {
        if particle.distance_to_target() >= max_distance {
            continue;
        }
        let px = (particle.current.x - target_origin.x).floor() as i64;
        let py = (particle.current.y - target_origin.y).floor() as i64;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (x, y) = (px + dx, py + dy);
                if x >= 0 && y >= 0 && x < width && y < height {
                    revealed.insert((x as u32, y as u32));
                }
            }
        }
    }

    revealed
}

/// Composite the revealed portion of the target image onto `frame`.
///
/// Active only past [`REVEAL_START`]. Revealed pixels sample the target
/// bitmap and draw at the target rectangle's screen position with alpha
/// `round(255 * reveal_progress)`, so the image condenses into view exactly
/// where converging particles cluster.
pub fn draw_reveal(
    frame: &mut Frame,
    target: &Bitmap,
    target_origin: Point,
    particles: &[Particle],
    progress: f64,
) {
    let rp = reveal_progress(progress);
    if rp <= 0.0 {
        return;
    }

    let alpha = (255.0 * rp).round().clamp(0.0, 255.0) as u8;
    let origin_x = target_origin.x.floor() as i64;
    let origin_y = target_origin.y.floor() as i64;

    for (x, y) in revealed_pixels(particles, rp, target, target_origin) {
        let src = premul(target.rgb(x, y), alpha);
        let (fx, fy) = (origin_x + i64::from(x), origin_y + i64::from(y));
        if frame.contains(fx, fy) {
            frame.put(fx, fy, over(frame.get(fx, fy), src));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/reveal.rs"]
mod tests;
