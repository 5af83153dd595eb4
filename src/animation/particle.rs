use std::f64::consts::PI;

use kurbo::{Point, Vec2};

use crate::animation::ease::Ease;
use crate::assign::solver::ParticleSeed;
use crate::foundation::core::Rgb8;
use crate::foundation::math::Rng64;

/// Floor for the `1 - fall_delay` denominator so a delay of exactly 1.0
/// reads as "already past the delay" instead of dividing by zero.
const DELAY_DENOM_EPSILON: f64 = 1e-6;

/// A single pixel-carrying particle.
///
/// Start/target endpoints and colors are fixed at creation; `current`,
/// `color`, `velocity`, and `age` mutate every tick. Which fields the tick
/// actually reads depends on the [`MorphKind`](crate::MorphKind) in flight:
/// the scatter velocity and wobble parameters only matter to `SandFall`, the
/// fall delay additionally staggers every kind's color blend.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub start: Point,
    pub target: Point,
    pub current: Point,
    pub source_color: Rgb8,
    pub target_color: Rgb8,
    pub color: Rgb8,
    /// Draw radius class; 2 or below draws as a single pixel.
    pub size: u32,
    pub velocity: Vec2,
    /// Seconds since creation.
    pub age: f64,
    pub gravity: f64,
    pub friction: f64,
    pub wobble_frequency: f64,
    pub wobble_amplitude: f64,
    /// Overall-progress threshold before this particle is pulled toward its
    /// target; also staggers the color blend. In `[0, 0.4)`.
    pub fall_delay: f64,
}

impl Particle {
    pub fn new(seed: ParticleSeed, gravity: f64, friction: f64, rng: &mut Rng64) -> Self {
        // Initial outward scatter so pixels appear to break away from the
        // stroke, with the vertical component damped.
        let angle = rng.range(0.0, PI * 2.0);
        let speed = rng.range(40.0, 80.0);
        let velocity = Vec2::new(angle.cos() * speed, angle.sin() * speed * 0.4);

        Self {
            start: seed.start,
            target: seed.target,
            current: seed.start,
            source_color: seed.source_color,
            target_color: seed.target_color,
            color: seed.source_color,
            size: seed.size,
            velocity,
            age: 0.0,
            gravity,
            friction,
            wobble_frequency: rng.range(0.5, 1.5),
            wobble_amplitude: rng.range(2.0, 8.0),
            fall_delay: rng.range(0.0, 0.4),
        }
    }

    /// Euclidean distance from the current position to the target.
    pub fn distance_to_target(&self) -> f64 {
        (self.target - self.current).hypot()
    }

    /// This particle's progress once its fall delay has elapsed, in `[0, 1]`.
    pub fn adjusted_progress(&self, progress: f64) -> f64 {
        let denom = (1.0 - self.fall_delay).max(DELAY_DENOM_EPSILON);
        ((progress - self.fall_delay) / denom).clamp(0.0, 1.0)
    }

    /// Two-phase sand kinematics: free fall with wobble until the particle's
    /// own delay elapses, then reduced gravity plus a progress-driven
    /// exponential pull into the target.
    pub fn update_sand_fall(&mut self, progress: f64, dt: f64) {
        if progress < self.fall_delay {
            self.velocity.y += self.gravity * dt;
            self.velocity.x *= self.friction;

            let wobble = (self.age * self.wobble_frequency).sin() * self.wobble_amplitude;
            self.velocity.x += wobble * dt;

            self.current += self.velocity * dt;
        } else {
            let adjusted = self.adjusted_progress(progress);

            self.velocity.y += self.gravity * 0.35 * dt;
            self.velocity.x *= self.friction.max(0.6);

            self.current += self.velocity * dt;

            // Exponential-decay attraction, not a snap; stable while
            // attraction * dt < 1.
            let attraction = (adjusted.powf(1.5) * 3.0).min(4.0);
            self.current.x =
                self.current.x * (1.0 - attraction * dt) + self.target.x * (attraction * dt);
            self.current.y =
                self.current.y * (1.0 - attraction * dt) + self.target.y * (attraction * dt);

            // The manager's global blend overrides this each tick; kept so
            // the kinematic is self-contained.
            self.color = self.source_color.lerp(self.target_color, adjusted);
        }

        self.age += dt;
    }

    /// Spiral around `center` early, converge on the target late.
    pub fn update_particle_swirl(&mut self, progress: f64, dt: f64, center: Point) {
        let angle = self.age * 2.0 + progress * PI * 4.0;
        let radius = 50.0 * (1.0 - progress);

        let spiral = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );

        self.current.x = spiral.x * (1.0 - progress) + self.target.x * progress;
        self.current.y = spiral.y * (1.0 - progress) + self.target.y * progress;

        self.age += dt;
    }

    /// Direct eased interpolation from start to target.
    pub fn update_pixel_morph(&mut self, progress: f64, dt: f64) {
        let eased = Ease::OutQuad.apply(progress);

        self.current.x = self.start.x * (1.0 - eased) + self.target.x * eased;
        self.current.y = self.start.y * (1.0 - eased) + self.target.y * eased;

        self.age += dt;
    }

    /// Smoothstep interpolation with a decaying ripple keyed to the starting
    /// x, so particles don't move in lockstep. The ripple scales by
    /// `1 - progress` and is exactly zero at the end.
    pub fn update_wave_transform(&mut self, progress: f64, dt: f64) {
        let wave_offset = (progress * PI * 2.0 + self.start.x * 0.1).sin() * 20.0 * (1.0 - progress);

        let eased = Ease::SmoothStep.apply(progress);

        self.current.x = self.start.x * (1.0 - eased) + self.target.x * eased;
        self.current.y = self.start.y * (1.0 - eased) + self.target.y * eased + wave_offset;

        self.age += dt;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particle.rs"]
mod tests;
