use crate::foundation::core::Rgb8;
use crate::foundation::math::mul_div255_u8;

/// Porter-Duff source-over for premultiplied RGBA8 pixels.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Premultiply a straight color and alpha into an RGBA8 pixel.
pub(crate) fn premul(color: Rgb8, alpha: u8) -> [u8; 4] {
    let a = u16::from(alpha);
    [
        mul_div255_u8(u16::from(color.r), a),
        mul_div255_u8(u16::from(color.g), a),
        mul_div255_u8(u16::from(color.b), a),
        alpha,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
