//! Python-boundary helpers shared by the PyO3 bindings in `lib.rs`.
//!
//! Everything here is compiled only with the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use crate::{
    distribution::{algebra::DEFAULT_MEAN_EQ_EPS, fdd::DiscreteDistribution},
    queueing::options::{DEFAULT_EPS_PROB, LindleyOptions},
};

/// Accept a 1-D `numpy.ndarray` of `float64` or any sequence of floats.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec(raw: &Bound<'_, PyAny>, what: &str) -> PyResult<Vec<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr.as_array().to_vec());
    }
    raw.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err(format!("{what} must be a 1-D numpy.ndarray or sequence of float"))
    })
}

/// Accept a 1-D `numpy.ndarray` of `int64` or any sequence of integers.
#[cfg(feature = "python-bindings")]
pub fn extract_i64_vec(raw: &Bound<'_, PyAny>, what: &str) -> PyResult<Vec<i64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<i64>>() {
        return Ok(arr.as_array().to_vec());
    }
    raw.extract::<Vec<i64>>().map_err(|_| {
        PyTypeError::new_err(format!("{what} must be a 1-D numpy.ndarray or sequence of int"))
    })
}

/// Build solver options from optional Python keyword arguments.
///
/// Missing `eps_prob` / `tol_mean` fall back to the documented defaults;
/// `max_iter = None` means no cap.
#[cfg(feature = "python-bindings")]
pub fn build_lindley_options(
    eps_prob: Option<f64>, tol_mean: Option<f64>, max_iter: Option<usize>,
) -> PyResult<LindleyOptions> {
    let opts = LindleyOptions::new(
        eps_prob.unwrap_or(DEFAULT_EPS_PROB),
        tol_mean.unwrap_or(DEFAULT_MEAN_EQ_EPS),
        max_iter,
    )?;
    Ok(opts)
}

/// Evaluate a Python predicate on every value of the window.
///
/// The returned mask is aligned with `d.pk()`; errors raised by the callable
/// propagate unchanged.
#[cfg(feature = "python-bindings")]
pub fn evaluate_condition(d: &DiscreteDistribution, condition: &Bound<'_, PyAny>) -> PyResult<Vec<bool>> {
    d.iter().map(|(x, _)| condition.call1((x,))?.is_truthy()).collect()
}
