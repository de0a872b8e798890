use crate::complex::Complex;
use serde::{Deserialize, Serialize};

/// Which escape-time iteration classifies each plane point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalFamily {
    /// z → z^p + c, seeded at the origin. p = 2 is the classic Mandelbrot.
    Mandelbrot,
    /// z → z² + k with fixed constant k, seeded at the mapped plane point.
    Julia,
    /// z → (|Re z|, |Im z|)² + c, seeded at the origin.
    BurningShip,
}

impl FractalFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            FractalFamily::Mandelbrot => "Mandelbrot",
            FractalFamily::Julia => "Julia",
            FractalFamily::BurningShip => "Burning Ship",
        }
    }
}

/// Per-frame fractal parameters.
///
/// `power` applies to the Mandelbrot/Multibrot family only; `julia_constant`
/// to the Julia family only. Both stay at their defaults otherwise so a
/// family switch round-trips without losing slider positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub family: FractalFamily,
    pub power: f64,
    pub julia_constant: Complex,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            family: FractalFamily::Mandelbrot,
            power: 2.0,
            julia_constant: Complex::new(-0.7, 0.27015),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quadratic_mandelbrot() {
        let params = FractalParams::default();
        assert_eq!(params.family, FractalFamily::Mandelbrot);
        assert_eq!(params.power, 2.0);
    }

    #[test]
    fn default_julia_constant_is_classic_seed() {
        let params = FractalParams::default();
        assert_eq!(params.julia_constant, Complex::new(-0.7, 0.27015));
    }

    #[test]
    fn display_names() {
        assert_eq!(FractalFamily::Mandelbrot.display_name(), "Mandelbrot");
        assert_eq!(FractalFamily::Julia.display_name(), "Julia");
        assert_eq!(FractalFamily::BurningShip.display_name(), "Burning Ship");
    }

    #[test]
    fn serialization_roundtrip() {
        let original = FractalParams {
            family: FractalFamily::Julia,
            power: 3.5,
            julia_constant: Complex::new(0.285, 0.01),
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: FractalParams = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
