use crate::Probability;

/// the primitive draws our simulations need. implementors
/// are trusted to return well-formed samples; callers are
/// responsible for handing in well-formed parameters.
pub trait RandomSource {
    /// index of an entry drawn with probability proportional to its weight.
    /// weights must be non-negative with a positive sum.
    fn sample_categorical(&mut self, weights: &[Probability]) -> usize;

    /// uniform draw from the half-open interval [low, high).
    fn sample_uniform(&mut self, low: f64, high: f64) -> f64;

    /// Beta(alpha, beta) draw. both parameters must be positive.
    fn sample_beta(&mut self, alpha: f64, beta: f64) -> f64;

    /// standard normal draw.
    fn sample_normal(&mut self) -> f64;
}
