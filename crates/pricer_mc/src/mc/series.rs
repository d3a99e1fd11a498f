//! Ordered series of Monte Carlo estimates and their summary statistics.

use std::ops::Index;

/// Ordered sequence of price estimates.
///
/// Slot `i` holds the estimate of batch `i`; the order is the batch order
/// and is never sorted.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::EstimateSeries;
///
/// let series = EstimateSeries::from(vec![10.0, 11.0, 12.0]);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[1], 11.0);
/// assert_eq!(series.mean(), 11.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EstimateSeries {
    estimates: Vec<f64>,
}

impl EstimateSeries {
    /// Number of estimates.
    #[inline]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Returns `true` if the series holds no estimates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Estimates in batch order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.estimates
    }

    /// Iterator over estimates in batch order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.estimates.iter()
    }

    /// Consumes the series, returning the underlying buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.estimates
    }

    /// Arithmetic mean of the estimates; `NaN` when empty.
    ///
    /// Same value as `summary().mean`.
    pub fn mean(&self) -> f64 {
        self.summary().mean
    }

    /// Population variance (divisor `n`); `NaN` when empty.
    ///
    /// Same value as `summary().variance`.
    pub fn variance(&self) -> f64 {
        self.summary().variance
    }

    /// Computes all summary statistics in one pass over the data.
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::from_estimates(&self.estimates)
    }
}

impl From<Vec<f64>> for EstimateSeries {
    fn from(estimates: Vec<f64>) -> Self {
        Self { estimates }
    }
}

impl From<EstimateSeries> for Vec<f64> {
    fn from(series: EstimateSeries) -> Self {
        series.estimates
    }
}

impl Index<usize> for EstimateSeries {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.estimates[index]
    }
}

impl<'a> IntoIterator for &'a EstimateSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.estimates.iter()
    }
}

/// Summary statistics of an [`EstimateSeries`].
///
/// `variance` is the population variance of the estimates, and `std_error`
/// is the standard error of their mean.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesSummary {
    /// Number of estimates.
    pub count: usize,
    /// Mean of the estimates.
    pub mean: f64,
    /// Population variance of the estimates.
    pub variance: f64,
    /// Population standard deviation of the estimates.
    pub std_dev: f64,
    /// Standard error of the mean, `std_dev / √count`.
    pub std_error: f64,
    /// Smallest estimate.
    pub min: f64,
    /// Largest estimate.
    pub max: f64,
    /// Number of estimates that are NaN or infinite.
    pub non_finite: usize,
}

impl SeriesSummary {
    fn from_estimates(estimates: &[f64]) -> Self {
        let count = estimates.len();
        if count == 0 {
            return Self {
                count: 0,
                mean: f64::NAN,
                variance: f64::NAN,
                std_dev: f64::NAN,
                std_error: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
                non_finite: 0,
            };
        }

        // Welford update keeps the variance stable for long series.
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut non_finite = 0;
        for (i, &x) in estimates.iter().enumerate() {
            if !x.is_finite() {
                non_finite += 1;
            }
            let delta = x - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (x - mean);
            min = min.min(x);
            max = max.max(x);
        }

        let variance = m2 / count as f64;
        let std_dev = variance.sqrt();
        Self {
            count,
            mean,
            variance,
            std_dev,
            std_error: std_dev / (count as f64).sqrt(),
            min,
            max,
            non_finite,
        }
    }

    /// Returns the 95% confidence interval half-width of the mean.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width of the mean.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Number of standard errors separating the mean from `reference`.
    #[inline]
    pub fn z_score(&self, reference: f64) -> f64 {
        (self.mean - reference) / self.std_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_accessors() {
        let series = EstimateSeries::from(vec![3.0, 1.0, 2.0]);
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.as_slice(), &[3.0, 1.0, 2.0]);
        assert_eq!(series[0], 3.0);
        assert_eq!(series.iter().copied().collect::<Vec<_>>(), vec![3.0, 1.0, 2.0]);
        assert_eq!(series.into_vec(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mean_and_population_variance() {
        let series = EstimateSeries::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(series.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(series.variance(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_and_variance_agree_with_summary_bitwise() {
        // Long, poorly scaled series where naive and running sums diverge.
        let estimates: Vec<f64> = (0..10_000)
            .map(|i| 1.0e8 + 0.1 * (i % 97) as f64 + 1.0e-3 * (i % 13) as f64)
            .collect();
        let series = EstimateSeries::from(estimates);
        let summary = series.summary();

        assert_eq!(series.mean().to_bits(), summary.mean.to_bits());
        assert_eq!(series.variance().to_bits(), summary.variance.to_bits());
        assert!(EstimateSeries::from(Vec::<f64>::new()).mean().is_nan());
    }

    #[test]
    fn test_summary_matches_direct_computation() {
        let series = EstimateSeries::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let summary = series.summary();
        assert_eq!(summary.count, 8);
        assert_relative_eq!(summary.mean, 5.0, epsilon = 1e-12);
        assert_relative_eq!(summary.variance, 4.0, epsilon = 1e-12);
        assert_relative_eq!(summary.std_dev, 2.0, epsilon = 1e-12);
        assert_relative_eq!(summary.std_error, 2.0 / 8f64.sqrt(), epsilon = 1e-12);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.non_finite, 0);
        assert_relative_eq!(summary.confidence_95(), 1.96 * summary.std_error);
        assert!(summary.z_score(5.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_has_zero_variance() {
        let series = EstimateSeries::from(vec![8.0; 100]);
        let summary = series.summary();
        assert_eq!(summary.mean, 8.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn test_empty_series() {
        let series = EstimateSeries::default();
        assert!(series.is_empty());
        assert!(series.mean().is_nan());
        assert!(series.variance().is_nan());

        let summary = series.summary();
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
    }

    #[test]
    fn test_non_finite_counted() {
        let series = EstimateSeries::from(vec![1.0, f64::INFINITY, 2.0]);
        let summary = series.summary();
        assert_eq!(summary.non_finite, 1);
        assert_eq!(summary.max, f64::INFINITY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let series = EstimateSeries::from(vec![1.5, 2.5]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, "[1.5,2.5]");
        let back: EstimateSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }
}
