use kurbo::Point;

use crate::assets::bitmap::Bitmap;
use crate::foundation::core::Rgb8;
use crate::foundation::math::Rng64;

/// One sampled pixel: world-space position plus straight RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSample {
    pub position: Point,
    pub color: Rgb8,
}

/// A pixel counts as ink when its RGB channel sum is below this (pure white
/// sums to 765).
const INK_CHANNEL_SUM: u32 = 700;

/// A target pixel counts as part of the shape when its alpha exceeds this.
const SHAPE_ALPHA: u8 = 128;

/// Adaptive stride keeping the sample count roughly bounded regardless of
/// bitmap size.
pub(crate) fn adaptive_stride(bitmap: &Bitmap) -> u32 {
    (bitmap.width().min(bitmap.height()) / 100).max(1)
}

/// Extract ink pixels from the source bitmap on a uniform stride.
///
/// Pixels whose channel sum is below the ink threshold are kept; positions
/// are translated into world space by `offset`. `stride_override` replaces
/// the adaptive stride when set.
pub fn extract_source_samples(
    bitmap: &Bitmap,
    offset: Point,
    stride_override: Option<u32>,
) -> Vec<PixelSample> {
    let stride = stride_override.filter(|&s| s > 0).unwrap_or_else(|| adaptive_stride(bitmap));

    let mut samples = Vec::new();
    let mut y = 0;
    while y < bitmap.height() {
        let mut x = 0;
        while x < bitmap.width() {
            let color = bitmap.rgb(x, y);
            if color.channel_sum() < INK_CHANNEL_SUM {
                samples.push(PixelSample {
                    position: Point::new(offset.x + f64::from(x), offset.y + f64::from(y)),
                    color,
                });
            }
            x += stride;
        }
        y += stride;
    }
    samples
}

/// Extract shape pixels from the target bitmap, resampled to `desired` entries.
///
/// Every pixel is scanned. RGBA bitmaps keep pixels with alpha above the
/// shape threshold; RGB bitmaps fall back to the ink test. When more
/// candidates exist than `desired`, every `len / desired`-th is kept; when
/// fewer, the list is padded by drawing uniformly at random (with
/// replacement) from the candidates. An empty candidate list stays empty.
pub fn extract_target_samples(
    bitmap: &Bitmap,
    offset: Point,
    desired: usize,
    rng: &mut Rng64,
) -> Vec<PixelSample> {
    let mut candidates = Vec::new();
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let keep = if bitmap.has_alpha() {
                bitmap.alpha(x, y) > SHAPE_ALPHA
            } else {
                bitmap.rgb(x, y).channel_sum() < INK_CHANNEL_SUM
            };
            if keep {
                candidates.push(PixelSample {
                    position: Point::new(offset.x + f64::from(x), offset.y + f64::from(y)),
                    color: bitmap.rgb(x, y),
                });
            }
        }
    }

    if candidates.is_empty() || desired == 0 {
        return Vec::new();
    }

    let mut samples = if candidates.len() > desired {
        let step = candidates.len() / desired;
        candidates
            .iter()
            .step_by(step.max(1))
            .take(desired)
            .copied()
            .collect()
    } else {
        candidates.clone()
    };

    while samples.len() < desired {
        samples.push(candidates[rng.index(candidates.len())]);
    }
    samples
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/pixels.rs"]
mod tests;
