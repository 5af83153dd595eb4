//! Inkmorph dissolves a handwritten word into a target image, pixel by pixel.
//!
//! The engine takes two already-decoded bitmaps, the source (ink strokes on a
//! canvas) and the target (the image the ink should become), and animates a
//! particle per sampled ink pixel from its source position to an assigned
//! target pixel, blending color along the way and progressively revealing the
//! target image where particles converge.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `Bitmap -> Vec<PixelSample>` (strided ink scan, full target scan)
//! 2. **Assign**: source/target samples -> one [`Particle`] per pair (greedy nearest-unused)
//! 3. **Update**: `Animator::update(dt)` advances progress and per-kind kinematics
//! 4. **Render**: `Animator::render(frame)` draws particles plus the reveal overlay
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows from a seeded [`Rng64`].
//! - **No IO in the engine**: decoding and fetching happen before [`Animator::start`].
//! - **Single-threaded, frame-driven**: the caller owns the loop; `update` then
//!   `render`, once per frame, never interleaved.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod assign;
mod foundation;
mod render;
mod sampling;

pub use animation::animator::{Animator, MorphConfig, MorphKind};
pub use animation::ease::Ease;
pub use animation::particle::Particle;
pub use assets::bitmap::{Bitmap, decode_bitmap};
pub use assign::solver::{ParticleSeed, assign_targets, equalize_source};
pub use foundation::core::{Frame, Point, Rgb8, Vec2};
pub use foundation::error::{InkmorphError, InkmorphResult};
pub use foundation::math::Rng64;
pub use render::composite::over;
pub use render::particles::draw_particles;
pub use render::reveal::{REVEAL_START, draw_reveal, reveal_progress, revealed_pixels};
pub use sampling::pixels::{PixelSample, extract_source_samples, extract_target_samples};
