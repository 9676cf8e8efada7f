// Uniform random numbers in the host's `random(min, max)` style

use rand::rngs::ThreadRng;
use rand::Rng;

pub trait RandomSource {
    /// Returns a value in `[min, max)`, or `min` when the range is empty.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        // gen_range panics on an empty range, a zero sized canvas hits this
        if max <= min {
            return min;
        }
        self.rng.gen_range(min, max)
    }
}
