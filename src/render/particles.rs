use crate::animation::particle::Particle;
use crate::foundation::core::Frame;
use crate::render::composite::{over, premul};

/// Opacity from distance-to-target: converging particles solidify, but a
/// floor keeps distant ones faintly visible.
fn proximity_alpha(distance: f64) -> u8 {
    (255.0 - distance * 0.8).clamp(40.0, 255.0) as u8
}

/// Draw every particle onto `frame`.
///
/// Particles draw at the floor of their current position; positions outside
/// the frame are silently skipped. Size 2 and below draws one opaque pixel
/// (the common case); larger sizes draw a filled circle composited at the
/// proximity alpha.
pub fn draw_particles(particles: &[Particle], frame: &mut Frame) {
    for particle in particles {
        let x = particle.current.x.floor() as i64;
        let y = particle.current.y.floor() as i64;
        if !frame.contains(x, y) {
            continue;
        }

        if particle.size <= 2 {
            frame.put(x, y, premul(particle.color, 255));
            continue;
        }

        let alpha = proximity_alpha(particle.distance_to_target());
        let src = premul(particle.color, alpha);
        let r = i64::from(particle.size);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (px, py) = (x + dx, y + dy);
                if frame.contains(px, py) {
                    frame.put(px, py, over(frame.get(px, py), src));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/particles.rs"]
mod tests;
