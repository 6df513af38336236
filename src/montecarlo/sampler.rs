use crate::random::RandomSource;

/// the random variable under study, cos²(z).
pub fn integrand(z: f64) -> f64 {
    z.cos().powi(2)
}

/// `size` independent draws of cos²Z with Z ~ N(0, 1).
pub fn sample<R>(rng: &mut R, size: usize) -> Vec<f64>
where
    R: RandomSource,
{
    (0..size).map(|_| integrand(rng.sample_normal())).collect()
}
