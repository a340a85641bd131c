//! distribution::fdd — the finite discrete distribution value type.
//!
//! Purpose
//! -------
//! Define [`DiscreteDistribution`], a random variable with finite integer
//! support represented as a contiguous window `[xmin, xmax]` plus an aligned,
//! dense probability buffer. Every other module in the crate operates on this
//! type.
//!
//! Key behaviors
//! -------------
//! - Build a distribution from an arbitrary, possibly unsorted list of
//!   `(value, probability)` pairs by scattering each probability to the offset
//!   `value - xmin` of a dense window ([`DiscreteDistribution::new`]).
//! - Expose read-only accessors for the window, the buffer and the label.
//! - Evaluate the PMF and CDF at arbitrary integers, and over wider windows for
//!   operators that align several distributions.
//! - Check validity (`Σ pk == 1` within [`MASS_TOLERANCE`]) and renormalize on
//!   request, always returning a new value.
//!
//! Invariants & assumptions
//! ------------------------
//! - `xmin <= xmax` and `pk.len() == xmax - xmin + 1` for every instance.
//! - The window holds at most [`MAX_WINDOW_LEN`] values. Every operator that
//!   moves or widens a window computes its bounds with checked arithmetic and
//!   reports [`DistError::WindowOverflow`] instead of wrapping or panicking.
//! - Every probability is finite and `>= 0`. Public constructors reject
//!   anything else; crate-internal operators only ever produce such buffers.
//! - Total mass equal to one is *not* enforced: σ tails and trims without
//!   renormalization legitimately yield sub-distributions.
//!
//! Conventions
//! -----------
//! - Position `i` of the buffer corresponds to the value `xmin + i`.
//! - Repeated input values accumulate, so operators that map several values
//!   onto one (scale by zero, absolute value) keep all mass.
//! - The `name` is a diagnostic label only; it never influences arithmetic
//!   and is ignored by nothing but `PartialEq`.
//! - Values are immutable after construction. Operators return new instances
//!   (copy-on-write); there are no in-place variants.
//!
//! Downstream usage
//! ----------------
//! - Algebra, support, trim and extremal operators construct their results
//!   through the crate-internal [`DiscreteDistribution::from_window`].
//! - Factories and callers use [`DiscreteDistribution::new`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover scatter construction (unsorted input, gaps, repeated
//!   values), rejection of malformed input, PMF/CDF evaluation inside and
//!   outside the window, and renormalization.
use crate::distribution::{
    errors::{DistError, DistResult},
    validation::{MASS_TOLERANCE, validate_pairs},
};
use ndarray::{Array1, s};

/// Largest number of values a support window may span.
pub const MAX_WINDOW_LEN: usize = 1 << 24;

/// Finite discrete distribution over a contiguous integer window.
///
/// Fields
/// ------
/// - `xmin`, `xmax`: `i64` bounds of the support window (inclusive).
/// - `pk`: `Array1<f64>` probabilities, one per integer in the window.
/// - `name`: diagnostic label used by `Display`.
///
/// Invariants
/// ----------
/// - `xmin <= xmax`, `pk.len() == xmax - xmin + 1`, entries finite and `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteDistribution {
    xmin: i64,
    xmax: i64,
    pk: Array1<f64>,
    name: String,
}

impl DiscreteDistribution {
    /// Build a distribution from `(value, probability)` lists.
    ///
    /// Parameters
    /// ----------
    /// - `xk`: `&[i64]`
    ///   Support values in any order; gaps are allowed.
    /// - `pk`: `&[f64]`
    ///   Probabilities aligned with `xk`; finite and `>= 0`.
    /// - `name`: label for diagnostics.
    ///
    /// Returns
    /// -------
    /// A distribution whose window is `[min(xk), max(xk)]`. Integers in the
    /// window that are absent from `xk` receive probability 0; repeated values
    /// accumulate.
    ///
    /// Errors
    /// ------
    /// - `DistError::LengthMismatch` if `xk.len() != pk.len()`.
    /// - `DistError::EmptySupport` if both lists are empty.
    /// - `DistError::InvalidProbability` for a negative or non-finite entry.
    /// - `DistError::WindowOverflow` if `[min xk, max xk]` spans more than
    ///   [`MAX_WINDOW_LEN`] values.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use discrete_time::distribution::fdd::DiscreteDistribution;
    /// let d = DiscreteDistribution::new(&[3, 1], &[0.25, 0.75], "X").unwrap();
    /// assert_eq!((d.xmin(), d.xmax()), (1, 3));
    /// assert_eq!(d.pk().to_vec(), vec![0.75, 0.0, 0.25]);
    /// ```
    pub fn new(xk: &[i64], pk: &[f64], name: impl Into<String>) -> DistResult<Self> {
        validate_pairs(xk, pk)?;
        let xmin = xk.iter().copied().fold(i64::MAX, i64::min);
        let xmax = xk.iter().copied().fold(i64::MIN, i64::max);
        let mut buf = Array1::<f64>::zeros(window_len(xmin, xmax, "new")?);
        for (&x, &p) in xk.iter().zip(pk) {
            buf[(x - xmin) as usize] += p;
        }
        Ok(Self { xmin, xmax, pk: buf, name: name.into() })
    }

    /// Build a distribution from a dense buffer starting at `xmin`.
    ///
    /// Crate-internal: callers guarantee a non-empty buffer of finite,
    /// non-negative entries whose window `[xmin, xmin + len - 1]` was checked
    /// with [`window_len`] or lies inside an existing window.
    pub(crate) fn from_window(xmin: i64, pk: Array1<f64>, name: impl Into<String>) -> Self {
        debug_assert!(!pk.is_empty(), "window buffer must not be empty");
        let xmax = xmin + (pk.len() as i64 - 1);
        Self { xmin, xmax, pk, name: name.into() }
    }

    /// Single-point distribution with mass `prob` at `x`.
    pub(crate) fn point(x: i64, prob: f64, name: impl Into<String>) -> Self {
        Self::from_window(x, Array1::from_elem(1, prob), name)
    }

    pub fn xmin(&self) -> i64 {
        self.xmin
    }

    pub fn xmax(&self) -> i64 {
        self.xmax
    }

    /// Probability buffer aligned with `xmin..=xmax`.
    pub fn pk(&self) -> &Array1<f64> {
        &self.pk
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of integers in the support window (zeros included).
    pub fn window_len(&self) -> usize {
        self.pk.len()
    }

    /// Support values `xmin..=xmax` as an array.
    pub fn xk(&self) -> Array1<i64> {
        Array1::from_iter(self.xmin..=self.xmax)
    }

    /// Iterate `(value, probability)` over the whole window.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        (self.xmin..=self.xmax).zip(self.pk.iter().copied())
    }

    /// Return the same distribution under a new label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sum of all probabilities in the window.
    pub fn total_mass(&self) -> f64 {
        self.pk.sum()
    }

    /// `true` if all entries are non-negative and the mass is one within
    /// [`MASS_TOLERANCE`].
    pub fn is_valid(&self) -> bool {
        self.pk.iter().all(|&p| p >= 0.0) && (self.total_mass() - 1.0).abs() < MASS_TOLERANCE
    }

    /// Clip probabilities to `[0, 1]` and rescale them to sum to one.
    ///
    /// # Errors
    /// Returns [`DistError::ZeroMass`] if nothing positive remains.
    pub fn normalized(&self) -> DistResult<Self> {
        let clipped = self.pk.mapv(|p| p.clamp(0.0, 1.0));
        let mass = clipped.sum();
        if mass <= 0.0 {
            return Err(DistError::ZeroMass);
        }
        Ok(Self::from_window(self.xmin, clipped / mass, self.name.clone()))
    }

    /// `P(X = x)`; zero outside the window.
    pub fn pmf(&self, x: i64) -> f64 {
        self.index_of(x).map_or(0.0, |i| self.pk[i])
    }

    /// `P(X <= x)`; zero below the window, total mass at or above `xmax`.
    pub fn cdf(&self, x: i64) -> f64 {
        if x < self.xmin {
            0.0
        } else if x >= self.xmax {
            self.total_mass()
        } else {
            self.pk.slice(s![..=((x - self.xmin) as usize)]).sum()
        }
    }

    /// Running cumulative sums of the buffer.
    pub(crate) fn cumulative(&self) -> Array1<f64> {
        let mut acc = 0.0;
        self.pk.mapv(|p| {
            acc += p;
            acc
        })
    }

    /// PMF evaluated over the (wider) window `[lo, hi]`.
    pub(crate) fn pmf_over(&self, lo: i64, hi: i64) -> Array1<f64> {
        Array1::from_iter((lo..=hi).map(|x| self.pmf(x)))
    }

    /// CDF evaluated over the (wider) window `[lo, hi]`.
    pub(crate) fn cdf_over(&self, lo: i64, hi: i64) -> Array1<f64> {
        let cum = self.cumulative();
        let mass = cum[cum.len() - 1];
        Array1::from_iter((lo..=hi).map(|x| match self.index_of(x) {
            Some(i) => cum[i],
            None if x < self.xmin => 0.0,
            None => mass,
        }))
    }

    /// Buffer offset of `x`, if `x` lies inside the window.
    pub(crate) fn index_of(&self, x: i64) -> Option<usize> {
        if x < self.xmin || x > self.xmax { None } else { Some((x - self.xmin) as usize) }
    }
}

impl std::fmt::Display for DiscreteDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.window_len() < 10 {
            let xs: Vec<String> = (self.xmin..=self.xmax).map(|x| x.to_string()).collect();
            let ps: Vec<String> = self.pk.iter().map(|p| format!("{p:.3}")).collect();
            write!(f, "{}: xk=[{}], pk=[{}]", self.name, xs.join(","), ps.join(","))
        } else {
            write!(
                f,
                "{}: xk={},...,{}, pk={:e},...,{:e}",
                self.name,
                self.xmin,
                self.xmax,
                self.pk[0],
                self.pk[self.window_len() - 1]
            )
        }
    }
}

/// Number of integers in `[xmin, xmax]`, checked against overflow and
/// [`MAX_WINDOW_LEN`].
pub(crate) fn window_len(xmin: i64, xmax: i64, operator: &'static str) -> DistResult<usize> {
    xmax.checked_sub(xmin)
        .and_then(|span| usize::try_from(span).ok())
        .and_then(|span| span.checked_add(1))
        .filter(|&len| len <= MAX_WINDOW_LEN)
        .ok_or(DistError::WindowOverflow { operator })
}

/// Unwrap a checked bound computation into a `WindowOverflow` error.
#[inline]
pub(crate) fn checked_bound(bound: Option<i64>, operator: &'static str) -> DistResult<i64> {
    bound.ok_or(DistError::WindowOverflow { operator })
}
