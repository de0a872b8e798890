//! Escape-time iteration for all fractal families.
//!
//! f64 arithmetic throughout; transcendental calls go through `libm` so
//! iteration counts are bit-reproducible across platforms.

use fractalpane_core::{Complex, FractalFamily, FractalParams};

/// Squared escape radius. |z|² ≥ 4 means |z| ≥ 2, past which the quadratic
/// orbits provably diverge.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Classification of one plane point. Produced fresh per pixel per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationResult {
    /// Completed iterations before escape, or `max_iter` if bounded.
    pub count: u32,
    /// The iterate at termination, kept for smooth coloring.
    pub final_z: Complex,
    /// False means the orbit stayed bounded for the whole budget and the
    /// point is classified as in the set.
    pub escaped: bool,
}

/// Run the bounded escape-time iteration for the plane point `c`.
///
/// Seeding by family:
/// - Mandelbrot/Multibrot and Burning Ship: z₀ = 0, per-pixel constant `c`
/// - Julia: z₀ = `c`, frame-wide constant `params.julia_constant`
///
/// Stops at the first n with |zₙ|² ≥ 4, or after `max_iter` iterations with
/// `escaped = false`. `count` is always in `[0, max_iter]`.
pub fn evaluate(c: Complex, params: &FractalParams, max_iter: u32) -> IterationResult {
    let (mut z, constant) = match params.family {
        FractalFamily::Mandelbrot | FractalFamily::BurningShip => (Complex::ZERO, c),
        FractalFamily::Julia => (c, params.julia_constant),
    };

    for n in 0..max_iter {
        if z.norm_sqr() >= ESCAPE_RADIUS_SQR {
            return IterationResult {
                count: n,
                final_z: z,
                escaped: true,
            };
        }
        z = match params.family {
            FractalFamily::Mandelbrot => step_multibrot(&z, &constant, params.power),
            FractalFamily::Julia => z.sqr().add(&constant),
            FractalFamily::BurningShip => z.abs_parts().sqr().add(&constant),
        };
    }

    IterationResult {
        count: max_iter,
        final_z: z,
        escaped: false,
    }
}

/// One Multibrot step z → z^p + const in polar form:
/// r^p · (cos pθ, sin pθ) + const.
///
/// p == 2 takes the exact quadratic route so the classic Mandelbrot never
/// picks up pow/atan2 rounding. A zero iterate maps to the constant (0^p and
/// the angle at the origin are undefined).
fn step_multibrot(z: &Complex, constant: &Complex, power: f64) -> Complex {
    if power == 2.0 {
        return z.sqr().add(constant);
    }

    let r_sqr = z.norm_sqr();
    if r_sqr == 0.0 {
        return *constant;
    }

    // r^p = (r²)^(p/2) saves the sqrt
    let rp = libm::pow(r_sqr, power / 2.0);
    let theta = libm::atan2(z.im, z.re) * power;
    Complex::new(rp * libm::cos(theta), rp * libm::sin(theta)).add(constant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalpane_core::FractalParams;

    fn mandelbrot(power: f64) -> FractalParams {
        FractalParams {
            power,
            ..FractalParams::default()
        }
    }

    fn julia(re: f64, im: f64) -> FractalParams {
        FractalParams {
            family: FractalFamily::Julia,
            julia_constant: Complex::new(re, im),
            ..FractalParams::default()
        }
    }

    fn burning_ship() -> FractalParams {
        FractalParams {
            family: FractalFamily::BurningShip,
            ..FractalParams::default()
        }
    }

    #[test]
    fn origin_never_escapes() {
        // c = 0 is the fixed point z → z² stays at 0 forever.
        for max_iter in [1, 100, 5000] {
            let result = evaluate(Complex::ZERO, &mandelbrot(2.0), max_iter);
            assert!(!result.escaped);
            assert_eq!(result.count, max_iter);
        }
    }

    #[test]
    fn c_two_escapes_after_one_iteration() {
        // z₁ = 2 sits exactly on the escape radius (|z₁|² = 4), which
        // already counts as escaped.
        let result = evaluate(Complex::new(2.0, 0.0), &mandelbrot(2.0), 100);
        assert!(result.escaped);
        assert_eq!(result.count, 1);
    }

    #[test]
    fn far_exterior_point_escapes_immediately_after_seed() {
        let result = evaluate(Complex::new(10.0, 0.0), &mandelbrot(2.0), 100);
        assert!(result.escaped);
        assert!(result.count <= 1);
    }

    #[test]
    fn main_cardioid_point_is_in_set() {
        let result = evaluate(Complex::new(-0.5, 0.0), &mandelbrot(2.0), 300);
        assert!(!result.escaped);
        assert_eq!(result.count, 300);
    }

    #[test]
    fn count_never_exceeds_budget() {
        for c in [
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, 0.5),
            Complex::new(-1.25, 0.02),
        ] {
            let result = evaluate(c, &mandelbrot(2.0), 50);
            assert!(result.count <= 50);
        }
    }

    #[test]
    fn power_two_polar_path_never_taken() {
        // The quadratic shortcut must make p = 2.0 bit-identical to sqr+add.
        let c = Complex::new(-0.75, 0.1);
        let via_evaluate = evaluate(c, &mandelbrot(2.0), 64);

        let mut z = Complex::ZERO;
        let mut reference = IterationResult {
            count: 64,
            final_z: Complex::ZERO,
            escaped: false,
        };
        for n in 0..64 {
            if z.norm_sqr() >= ESCAPE_RADIUS_SQR {
                reference = IterationResult {
                    count: n,
                    final_z: z,
                    escaped: true,
                };
                break;
            }
            z = z.sqr().add(&c);
            reference.final_z = z;
        }

        assert_eq!(via_evaluate.count, reference.count);
        assert_eq!(via_evaluate.escaped, reference.escaped);
        if via_evaluate.escaped {
            assert_eq!(via_evaluate.final_z, reference.final_z);
        }
    }

    #[test]
    fn multibrot_zero_iterate_maps_to_constant() {
        // With z₀ = 0 and p ≠ 2 the first step must produce exactly c, not
        // NaN from atan2(0, 0) or 0^p.
        let c = Complex::new(0.1, 0.2);
        let result = evaluate(c, &mandelbrot(3.0), 2);
        assert!(result.final_z.re.is_finite());
        assert!(result.final_z.im.is_finite());
    }

    #[test]
    fn multibrot_cubic_origin_stays_bounded() {
        let result = evaluate(Complex::ZERO, &mandelbrot(3.0), 200);
        assert!(!result.escaped);
    }

    #[test]
    fn julia_escaping_seed_has_known_count() {
        // z₀ = 1.5, k = −0.7 + 0.27015i:
        //   |z₀|² = 2.25, |z₁|² ≈ 2.476, |z₂|² ≈ 3.882, |z₃|² ≈ 15.6
        // so the escape check first trips at n = 3.
        let result = evaluate(Complex::new(1.5, 0.0), &julia(-0.7, 0.27015), 500);
        assert!(result.escaped);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn julia_critical_orbit_escapes_at_baseline_count() {
        // Regression baseline: the critical orbit (z₀ = 0) of the default
        // constant escapes after exactly 96 iterations, and identically on
        // every evaluation.
        let params = julia(-0.7, 0.27015);
        let first = evaluate(Complex::ZERO, &params, 500);
        assert!(first.escaped);
        assert_eq!(first.count, 96);
        assert_eq!(first, evaluate(Complex::ZERO, &params, 500));
    }

    #[test]
    fn julia_seeds_from_plane_point_not_origin() {
        // A far-out seed escapes instantly regardless of the constant.
        let result = evaluate(Complex::new(5.0, 5.0), &julia(-0.7, 0.27015), 100);
        assert!(result.escaped);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn burning_ship_origin_is_bounded() {
        let result = evaluate(Complex::ZERO, &burning_ship(), 300);
        assert!(!result.escaped);
    }

    #[test]
    fn burning_ship_differs_from_mandelbrot_below_axis() {
        // The absolute-value fold changes the orbit below the real axis, so
        // the two families must not produce the same result there.
        let c = Complex::new(-0.6, -0.9);
        let ship = evaluate(c, &burning_ship(), 100);
        let brot = evaluate(c, &mandelbrot(2.0), 100);
        assert_ne!(ship, brot);
    }
}
