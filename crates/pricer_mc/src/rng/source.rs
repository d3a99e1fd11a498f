//! Abstract source of standard-normal draws.

/// A stateful stream of independent N(0, 1) draws.
///
/// Each call to [`draw`](VariateSource::draw) advances the stream; there is
/// no rewind. Implementations must be deterministic for a fixed seed and
/// call order.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::rng::{PricerRng, VariateSource};
///
/// fn sum_of_draws<R: VariateSource + ?Sized>(rng: &mut R, n: usize) -> f64 {
///     (0..n).map(|_| rng.draw()).sum()
/// }
///
/// let mut a = PricerRng::from_seed(7);
/// let mut b = PricerRng::from_seed(7);
/// assert_eq!(sum_of_draws(&mut a, 10), sum_of_draws(&mut b, 10));
/// ```
pub trait VariateSource {
    /// Returns the next standard-normal variate.
    fn draw(&mut self) -> f64;

    /// Fills `buffer` with consecutive draws, in stream order.
    #[inline]
    fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.draw();
        }
    }
}

impl<R: VariateSource + ?Sized> VariateSource for &mut R {
    #[inline]
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }

    #[inline]
    fn fill(&mut self, buffer: &mut [f64]) {
        (**self).fill(buffer)
    }
}
