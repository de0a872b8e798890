//! Continuous (smooth) coloring of iteration results.
//!
//! Integer iteration counts band visibly at equal-count boundaries; the
//! fractional escape index μ = n − log₂(log₂|z|²) + K removes the banding
//! because |z_{n+1}|² ≈ |z_n|⁴ near escape makes μ continuous across the
//! count increments.

use crate::escape::IterationResult;
use std::f64::consts::TAU;

/// Offset K added to the fractional escape index. Any fixed constant keeps μ
/// continuous; 1.0 keeps μ non-negative for first-check escapes at the
/// radius.
pub const SMOOTH_OFFSET: f64 = 1.0;

/// Palette cycles across the normalized index range.
pub const PALETTE_FREQ: f64 = 3.0;

/// Per-channel phase of the cosine palette, as fractions of a full cycle.
pub const PALETTE_PHASE: [f64; 3] = [0.0, 0.1, 0.2];

/// Cosmetic gamma applied before 8-bit quantization.
pub const GAMMA: f64 = 0.6;

/// Fractional escape index μ for an escaped result.
///
/// Returns `None` for bounded orbits and for the degenerate |z|² ≤ 1 case
/// where log₂(log₂(·)) is undefined; callers fall back to the deterministic
/// interior color.
pub fn smooth_index(result: &IterationResult) -> Option<f64> {
    if !result.escaped {
        return None;
    }
    let norm_sqr = result.final_z.norm_sqr();
    if norm_sqr <= 1.0 {
        return None;
    }
    Some(result.count as f64 - libm::log2(libm::log2(norm_sqr)) + SMOOTH_OFFSET)
}

/// Map an iteration result to an RGB color.
///
/// Escaped points run μ through a periodic cosine palette with gamma
/// correction; bounded (in-set) points are pure black, chosen
/// deterministically instead of evaluating the smoothing logs on a possibly
/// zero magnitude.
pub fn color_of(result: &IterationResult, max_iter: u32) -> [u8; 3] {
    let Some(mu) = smooth_index(result) else {
        return [0, 0, 0];
    };
    if max_iter == 0 {
        return [0, 0, 0];
    }

    let t = (mu / max_iter as f64).clamp(0.0, 1.0);
    palette(t)
}

/// Cosine palette, continuous and periodic in `t`.
fn palette(t: f64) -> [u8; 3] {
    let mut rgb = [0u8; 3];
    for (channel, phase) in rgb.iter_mut().zip(PALETTE_PHASE) {
        let wave = 0.5 + 0.5 * libm::cos(TAU * (PALETTE_FREQ * t + phase));
        let corrected = libm::pow(wave, GAMMA);
        *channel = (corrected * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    rgb
}
