use web_sys::js_sys::Math;

use crate::motion::RandomSource;

/// `Math.random()`.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        Math::random()
    }
}
