use anyhow::Context;
use image::{RgbImage, RgbaImage};

use crate::foundation::core::Rgb8;
use crate::foundation::error::InkmorphResult;

/// An already-decoded input pixel grid.
///
/// The source side (ink strokes on a canvas) is typically [`Bitmap::Rgb`];
/// the target side (a fetched or synthesized image) is usually
/// [`Bitmap::Rgba`] so transparency marks the background. The samplers treat
/// the two variants differently only where alpha matters.
#[derive(Clone, Debug)]
pub enum Bitmap {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Bitmap {
    pub fn width(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.width(),
            Self::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.height(),
            Self::Rgba(img) => img.height(),
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba(_))
    }

    /// RGB channels of the pixel at `(x, y)`. Must be in bounds.
    pub fn rgb(&self, x: u32, y: u32) -> Rgb8 {
        match self {
            Self::Rgb(img) => {
                let p = img.get_pixel(x, y);
                Rgb8::new(p[0], p[1], p[2])
            }
            Self::Rgba(img) => {
                let p = img.get_pixel(x, y);
                Rgb8::new(p[0], p[1], p[2])
            }
        }
    }

    /// Alpha of the pixel at `(x, y)`; opaque for RGB bitmaps.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        match self {
            Self::Rgb(_) => 255,
            Self::Rgba(img) => img.get_pixel(x, y)[3],
        }
    }
}

impl From<RgbImage> for Bitmap {
    fn from(img: RgbImage) -> Self {
        Self::Rgb(img)
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(img: RgbaImage) -> Self {
        Self::Rgba(img)
    }
}

/// Decode encoded image bytes into a [`Bitmap`], preserving an alpha channel
/// when the format carries one.
pub fn decode_bitmap(bytes: &[u8]) -> InkmorphResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(if dyn_img.color().has_alpha() {
        Bitmap::Rgba(dyn_img.to_rgba8())
    } else {
        Bitmap::Rgb(dyn_img.to_rgb8())
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bitmap.rs"]
mod tests;
