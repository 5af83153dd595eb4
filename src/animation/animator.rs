use kurbo::Point;

use crate::animation::particle::Particle;
use crate::assets::bitmap::Bitmap;
use crate::assign::solver::assign_targets;
use crate::foundation::core::Frame;
use crate::foundation::error::{InkmorphError, InkmorphResult};
use crate::foundation::math::Rng64;
use crate::render::{particles::draw_particles, reveal::draw_reveal};
use crate::sampling::pixels::{extract_source_samples, extract_target_samples};

/// The four transformation kinematics. A closed set: each run picks one and
/// the per-tick dispatch is an exhaustive match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MorphKind {
    SandFall,
    ParticleSwirl,
    PixelMorph,
    #[default]
    WaveTransform,
}

/// Engine configuration, passed once at construction.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct MorphConfig {
    /// Seconds for progress to run 0 to 1.
    pub duration_secs: f64,
    /// Downward acceleration for `SandFall`, in pixels per second squared.
    pub gravity: f64,
    /// Per-tick horizontal velocity retention for `SandFall`.
    pub friction: f64,
    /// Source sampling stride; `None` picks `max(1, min(w, h) / 100)`.
    pub source_stride: Option<u32>,
    /// Seed for all jitter, scatter, and resampling randomness.
    pub seed: u64,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            duration_secs: 25.0,
            gravity: 150.0,
            friction: 0.95,
            source_stride: None,
            seed: 0,
        }
    }
}

/// Owns the particle set and drives one transformation run at a time.
///
/// One `Animator` lives for the whole session; every [`Animator::start`]
/// discards the previous run wholesale. The caller owns the frame loop and
/// must not interleave `start`, `update`, and `render`; the engine is
/// strictly single-threaded and cooperative.
#[derive(Clone, Debug)]
pub struct Animator {
    config: MorphConfig,
    rng: Rng64,
    particles: Vec<Particle>,
    kind: MorphKind,
    progress: f64,
    duration_secs: f64,
    is_animating: bool,
    /// Swirl pivot, computed from the source bitmap bounds at `start`.
    center: Point,
    /// Retained for the progressive reveal overlay.
    target_bitmap: Option<Bitmap>,
    target_origin: Point,
}

impl Animator {
    pub fn new(config: MorphConfig) -> Self {
        Self {
            config,
            rng: Rng64::new(config.seed),
            particles: Vec::new(),
            kind: MorphKind::default(),
            progress: 0.0,
            duration_secs: config.duration_secs,
            is_animating: false,
            center: Point::ZERO,
            target_bitmap: None,
            target_origin: Point::ZERO,
        }
    }

    /// Begin a fresh run, discarding any run in flight.
    ///
    /// Samples ink pixels from `source`, shape pixels from `target`, pairs
    /// them, and builds the particle set. Either side sampling empty degrades
    /// to zero particles; the run still advances to completion on schedule
    /// with nothing drawn.
    #[tracing::instrument(skip(self, source, target))]
    pub fn start(
        &mut self,
        source: &Bitmap,
        target: &Bitmap,
        source_offset: Point,
        target_offset: Point,
        kind: MorphKind,
    ) {
        self.particles.clear();
        self.kind = kind;
        self.progress = 0.0;
        self.is_animating = true;

        self.center = Point::new(
            source_offset.x + f64::from(source.width() / 2),
            source_offset.y + f64::from(source.height() / 2),
        );

        let source_samples =
            extract_source_samples(source, source_offset, self.config.source_stride);
        let target_samples = extract_target_samples(
            target,
            target_offset,
            source_samples.len(),
            &mut self.rng,
        );

        let seeds = assign_targets(source_samples, target_samples, &mut self.rng);
        self.particles = seeds
            .into_iter()
            .map(|seed| {
                Particle::new(seed, self.config.gravity, self.config.friction, &mut self.rng)
            })
            .collect();

        self.target_bitmap = Some(target.clone());
        self.target_origin = target_offset;

        tracing::debug!(particles = self.particles.len(), "animation started");
    }

    /// Advance the run by `dt` seconds: progress, per-kind kinematics, then
    /// the global color blend. No-op when no run is animating.
    pub fn update(&mut self, dt: f64) {
        if !self.is_animating {
            return;
        }

        let dt = dt.max(0.0);
        self.progress += dt / self.duration_secs;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.is_animating = false;
        }

        for particle in &mut self.particles {
            match self.kind {
                MorphKind::SandFall => particle.update_sand_fall(self.progress, dt),
                MorphKind::ParticleSwirl => {
                    particle.update_particle_swirl(self.progress, dt, self.center)
                }
                MorphKind::PixelMorph => particle.update_pixel_morph(self.progress, dt),
                MorphKind::WaveTransform => particle.update_wave_transform(self.progress, dt),
            }

            // Color convergence is decoupled from positional kinematics:
            // every kind blends on the particle's own fall delay schedule,
            // overriding whatever the kinematic set.
            let bf = particle.adjusted_progress(self.progress);
            particle.color = particle.source_color.lerp(particle.target_color, bf);
        }
    }

    /// Draw the current state onto `frame`: every particle, then, once
    /// progress passes the reveal threshold, the target-image overlay where
    /// particles have converged.
    pub fn render(&self, frame: &mut Frame) {
        draw_particles(&self.particles, frame);

        if let Some(target) = &self.target_bitmap {
            draw_reveal(
                frame,
                target,
                self.target_origin,
                &self.particles,
                self.progress,
            );
        }
    }

    /// True once progress has reached 1.0 since the last [`Animator::start`].
    pub fn is_finished(&self) -> bool {
        !self.is_animating
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Read-only view of the particle set; the `Animator` is the sole mutator.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn kind(&self) -> MorphKind {
        self.kind
    }

    /// Change the kinematics. A run in flight switches dispatch immediately.
    pub fn set_kind(&mut self, kind: MorphKind) {
        self.kind = kind;
    }

    /// Override the configured duration, in seconds.
    pub fn set_duration(&mut self, duration_secs: f64) -> InkmorphResult<()> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(InkmorphError::validation(
                "duration_secs must be positive and finite",
            ));
        }
        self.duration_secs = duration_secs;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
