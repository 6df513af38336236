use crate::CONFIDENCE_Z_999;

/// summary statistics of an i.i.d. sample.
///
/// variance and deviation use the population divisor N,
/// and the interval is the normal approximation
/// mean ± z · deviation / √N at the 99.9% level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub size: usize,
    pub mean: f64,
    pub variance: f64,
    pub deviation: f64,
    pub half_width: f64,
}

impl Estimate {
    /// None for an empty sample, which has no mean.
    pub fn try_from_sample(sample: &[f64]) -> Option<Self> {
        if sample.is_empty() {
            return None;
        }
        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let deviation = variance.sqrt();
        let half_width = CONFIDENCE_Z_999 * deviation / n.sqrt();
        Some(Self {
            size: sample.len(),
            mean,
            variance,
            deviation,
            half_width,
        })
    }

    pub fn interval(&self) -> (f64, f64) {
        (self.mean - self.half_width, self.mean + self.half_width)
    }

    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = self.interval();
        lo <= x && x <= hi
    }
}

/// `x` to `digits` significant digits, trailing zeros dropped.
/// switches to scientific notation below 1e-4 or at 10^digits and above.
fn significant(x: f64, digits: usize) -> String {
    if x == 0. || !x.is_finite() {
        return format!("{:?}", x);
    }
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, x);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or_default();
    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = trim(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, x);
        match trim(&fixed) {
            t if t.contains('.') => t.to_string(),
            t => format!("{}.0", t),
        }
    }
}

fn trim(number: &str) -> &str {
    match number.contains('.') {
        true => number.trim_end_matches('0').trim_end_matches('.'),
        false => number,
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Expected value:\t{}", significant(self.mean, 3))?;
        writeln!(f, "Variance:\t{}", significant(self.variance, 3))?;
        write!(
            f,
            "The 99.9% confidence interval is {:.3}±{:.3}",
            self.mean, self.half_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montecarlo::sample;
    use crate::random::Dice;

    /// E[cos²Z] = (1 + e⁻²) / 2
    fn truth() -> f64 {
        (1. + (-2f64).exp()) / 2.
    }

    #[test]
    fn empty_sample_has_no_estimate() {
        assert_eq!(Estimate::try_from_sample(&[]), None);
    }

    #[test]
    fn known_sample() {
        let estimate = Estimate::try_from_sample(&[1., 2., 3., 4.]).unwrap();
        assert_eq!(estimate.size, 4);
        assert_eq!(estimate.mean, 2.5);
        assert_eq!(estimate.variance, 1.25);
        assert_eq!(estimate.deviation, 1.25f64.sqrt());
    }

    #[test]
    fn half_width_formula() {
        let xs = sample(&mut Dice::seeded(8), 1000);
        let estimate = Estimate::try_from_sample(&xs).unwrap();
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let std = (xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert_eq!(estimate.half_width, 3.291 * std / n.sqrt());
    }

    #[test]
    fn constant_sample_has_zero_width() {
        let estimate = Estimate::try_from_sample(&[0.5; 64]).unwrap();
        assert_eq!(estimate.variance, 0.);
        assert_eq!(estimate.interval(), (0.5, 0.5));
        assert!(estimate.contains(0.5));
    }

    #[test]
    fn covers_the_true_mean() {
        let xs = sample(&mut Dice::seeded(99), crate::MONTE_CARLO_SAMPLES);
        let estimate = Estimate::try_from_sample(&xs).unwrap();
        assert!(estimate.contains(truth()), "{} misses {}", estimate, truth());
    }

    #[test]
    fn display_format() {
        let estimate = Estimate::try_from_sample(&[0.2, 0.8]).unwrap();
        assert_eq!(
            estimate.to_string(),
            format!(
                "Expected value:\t0.5\nVariance:\t0.09\nThe 99.9% confidence interval is 0.500±{:.3}",
                estimate.half_width
            )
        );
    }

    #[test]
    fn three_significant_digits() {
        assert_eq!(significant(0.093744, 3), "0.0937");
        assert_eq!(significant(0.567668, 3), "0.568");
        assert_eq!(significant(1., 3), "1.0");
        assert_eq!(significant(12.5, 3), "12.5");
        assert_eq!(significant(0., 3), "0.0");
        assert_eq!(significant(-0.25, 3), "-0.25");
        assert_eq!(significant(0.0000123456, 3), "1.23e-05");
        assert_eq!(significant(123456., 3), "1.23e+05");
    }
}
