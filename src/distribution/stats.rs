//! distribution::stats — moments and summary queries.
//!
//! Inherent methods on [`DiscreteDistribution`] for the query surface:
//! moments, mode, quantiles and entropy. Moments are plain weighted sums over
//! the window and are not divided by the total mass, so on a
//! sub-distribution they describe the unnormalized measure.
use crate::distribution::{
    errors::DistResult,
    fdd::DiscreteDistribution,
    validation::{verify_entropy_base, verify_quantile_level},
};

impl DiscreteDistribution {
    /// `E[X] = Σ x · p(x)`.
    pub fn mean(&self) -> f64 {
        self.raw_moment(1)
    }

    /// `Var[X] = E[X²] - E[X]²`.
    pub fn variance(&self) -> f64 {
        let mu = self.mean();
        self.raw_moment(2) - mu * mu
    }

    pub fn std(&self) -> f64 {
        self.variance().max(0.0).sqrt()
    }

    /// `std / mean`; infinite or NaN when the mean is zero.
    pub fn coefficient_of_variation(&self) -> f64 {
        self.std() / self.mean()
    }

    /// Third standardized moment. NaN for a point mass.
    pub fn skewness(&self) -> f64 {
        let mu = self.mean();
        let sigma = self.std();
        (self.raw_moment(3) - 3.0 * mu * sigma * sigma - mu.powi(3)) / sigma.powi(3)
    }

    /// Entropy `-Σ p log_base p` over the positive entries.
    ///
    /// # Errors
    /// `DistError::InvalidEntropyBase` unless `base` is finite, `> 0`, `!= 1`.
    pub fn entropy(&self, base: f64) -> DistResult<f64> {
        verify_entropy_base(base)?;
        let h: f64 = self.pk().iter().filter(|&&p| p > 0.0).map(|&p| -p * p.log2()).sum();
        Ok(h / base.log2())
    }

    /// Smallest value with maximal probability.
    pub fn mode(&self) -> i64 {
        let mut best = (self.xmin(), f64::NEG_INFINITY);
        for (x, p) in self.iter() {
            if p > best.1 {
                best = (x, p);
            }
        }
        best.0
    }

    /// Smallest `x` with `CDF(x) > q`; `xmax` if the mass never exceeds `q`.
    ///
    /// # Errors
    /// `DistError::InvalidQuantile` unless `0 < q < 1`.
    ///
    /// # Examples
    /// ```rust
    /// # use discrete_time::distribution::factories::discrete_uniform;
    /// let d = discrete_uniform(1, 10).unwrap();
    /// assert_eq!(d.quantile(0.95).unwrap(), 10);
    /// assert_eq!(d.quantile(0.55).unwrap(), 6);
    /// ```
    pub fn quantile(&self, q: f64) -> DistResult<i64> {
        verify_quantile_level(q)?;
        let cum = self.cumulative();
        Ok(cum
            .iter()
            .position(|&c| c > q)
            .map_or(self.xmax(), |i| self.xmin() + i as i64))
    }

    fn raw_moment(&self, order: i32) -> f64 {
        self.iter().map(|(x, p)| (x as f64).powi(order) * p).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::distribution::{
        errors::DistError,
        factories::{bernoulli, deterministic, discrete_uniform},
        fdd::DiscreteDistribution,
    };
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Moments of DU(0, 10) match the closed forms.
    //
    // Given
    // -----
    // - A = DU(0, 10) (n = 11 points).
    //
    // Expect
    // ------
    // - mean 5, variance (n² - 1)/12 = 10, skewness 0.
    fn moments_of_discrete_uniform() {
        // Arrange
        let a = discrete_uniform(0, 10).unwrap();

        // Act / Assert
        assert_relative_eq!(a.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(a.variance(), 10.0, epsilon = 1e-10);
        assert_relative_eq!(a.std(), 10.0_f64.sqrt(), epsilon = 1e-10);
        assert_relative_eq!(a.coefficient_of_variation(), 10.0_f64.sqrt() / 5.0, epsilon = 1e-10);
        assert_relative_eq!(a.skewness(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn skewness_sign_follows_the_long_tail() {
        let right = DiscreteDistribution::new(&[0, 1, 10], &[0.5, 0.4, 0.1], "R").unwrap();
        assert!(right.skewness() > 0.0);
    }

    #[test]
    fn entropy_in_bits_and_nats() {
        let coin = bernoulli(0.5).unwrap();
        assert_relative_eq!(coin.entropy(2.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(coin.entropy(std::f64::consts::E).unwrap(), 2.0_f64.ln(), epsilon = 1e-12);
        assert_eq!(deterministic(4).entropy(2.0).unwrap(), 0.0);
        assert!(matches!(coin.entropy(1.0), Err(DistError::InvalidEntropyBase { .. })));
    }

    #[test]
    fn mode_prefers_smallest_value_on_ties() {
        let d = DiscreteDistribution::new(&[1, 2, 3], &[0.4, 0.2, 0.4], "T").unwrap();
        assert_eq!(d.mode(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Quantiles use the strict `CDF(x) > q` rule and validate the level.
    //
    // Given
    // -----
    // - Uniform on {0, 1, 2, 3}; CDF = 0.25, 0.5, 0.75, 1.
    //
    // Expect
    // ------
    // - q = 0.5 lands on 2 (CDF(1) = 0.5 is not > 0.5); q = 0.1 on 0.
    // - q = 0 and q = 1 are rejected.
    fn quantile_uses_strict_inequality() {
        // Arrange
        let d = discrete_uniform(0, 3).unwrap();

        // Act / Assert
        assert_eq!(d.quantile(0.5).unwrap(), 2);
        assert_eq!(d.quantile(0.1).unwrap(), 0);
        assert!(matches!(d.quantile(0.0), Err(DistError::InvalidQuantile { .. })));
        assert!(matches!(d.quantile(1.0), Err(DistError::InvalidQuantile { .. })));
    }
}
