use linfa::Float;
use ndarray::{Array, Array2};
use ndarray_rand::{rand::Rng, rand::SeedableRng, rand_distr::Uniform, RandomExt};
use rand_xoshiro::Xoshiro256Plus;

/// Simple random design generator on the unit hypercube.
///
/// Draws every cell independently from the uniform variate on `[0, 1)`,
/// without any stratification. Useful as a baseline against Latin
/// Hypercube designs.
pub struct Random<R: Rng + Clone> {
    rng: R,
}

impl Random<Xoshiro256Plus> {
    /// Constructor with an entropy-seeded random generator
    pub fn new() -> Self {
        Random {
            rng: Xoshiro256Plus::from_entropy(),
        }
    }
}

impl Default for Random<Xoshiro256Plus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Clone> Random<R> {
    /// Sets the random generator for reproducibility
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> Random<R2> {
        Random { rng }
    }

    /// Generates an `(ns, nx)`-shaped design belonging to `[0, 1)^nx`
    pub fn sample<F: Float>(&self, ns: usize, nx: usize) -> Array2<F> {
        let mut rng = self.rng.clone();
        Array::random_using((ns, nx), Uniform::new(0., 1.), &mut rng).mapv(F::cast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bounds_and_shape() {
        let design = Random::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .sample::<f64>(20, 3);
        assert_eq!(design.dim(), (20, 3));
        assert!(design.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_random_deterministic_given_seed() {
        let sample = || {
            Random::new()
                .with_rng(Xoshiro256Plus::seed_from_u64(42))
                .sample::<f64>(5, 2)
        };
        assert_eq!(sample(), sample());
    }
}
