//! discrete_time — finite discrete distributions and GI/GI/1 waiting times.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the `python-bindings`
//! feature, as the PyO3 bridge that exposes the distribution algebra and the
//! Lindley solver to Python via the `_discrete_time` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`distribution` and `queueing`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers (`DiscreteDistribution`, `LindleyResult`)
//!   and `#[pyfunction]` entry points for operators, factories and solvers.
//! - Create and register the Python submodules `distribution` and `queueing`
//!   under `discrete_time` so that dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts.
//!
//! Conventions
//! -----------
//! - Rust errors (`DistError`, `QueueError`) are converted to `ValueError`
//!   at the PyO3 boundary with their `Display` message preserved.
//! - Binary operators on the Python class follow the Rust operand dispatch:
//!   an `int` right-hand side is a shift, a distribution is a convolution.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on `distribution` and `queueing` directly and
//!   can ignore everything guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_gigi1_pipeline.rs`. The PyO3 layer is exercised from
//!   Python.

pub mod distribution;
pub mod queueing;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{PyArray1, ToPyArray};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    distribution::{
        algebra, distance, extremal, factories, fdd::DiscreteDistribution, support, trim,
    },
    queueing::{gigi1::gigi1_waiting_time, lindley::LindleyOutcome, lindley::solve_lindley},
    utils::{build_lindley_options, evaluate_condition, extract_f64_vec, extract_i64_vec},
};

/// DiscreteDistribution — Python-facing wrapper for a finite discrete distribution.
///
/// Purpose
/// -------
/// Expose [`DiscreteDistribution`] and its operators to Python while keeping
/// the value semantics of the Rust type: every method returns a new object.
///
/// Parameters
/// ----------
/// Constructed from Python via `DiscreteDistribution(xk, pk, name=None)`:
/// - `xk`: sequence or `int64` array of support values (any order).
/// - `pk`: sequence or `float64` array of probabilities aligned with `xk`.
/// - `name`: optional label; defaults to `"X"`.
///
/// Fields
/// ------
/// - `inner`: [`DiscreteDistribution`]
#[cfg(feature = "python-bindings")]
#[pyclass(name = "DiscreteDistribution", module = "discrete_time.distribution")]
#[derive(Clone)]
pub struct PyDiscreteDistribution {
    pub inner: DiscreteDistribution,
}

#[cfg(feature = "python-bindings")]
impl From<DiscreteDistribution> for PyDiscreteDistribution {
    fn from(inner: DiscreteDistribution) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyDiscreteDistribution {
    #[new]
    #[pyo3(signature = (xk, pk, name = None), text_signature = "(xk, pk, /, name=None)")]
    pub fn new(
        xk: &Bound<'_, PyAny>, pk: &Bound<'_, PyAny>, name: Option<String>,
    ) -> PyResult<Self> {
        let xk = extract_i64_vec(xk, "xk")?;
        let pk = extract_f64_vec(pk, "pk")?;
        let inner = DiscreteDistribution::new(&xk, &pk, name.unwrap_or_else(|| "X".to_string()))?;
        Ok(Self { inner })
    }

    // ---- Accessors ----

    #[getter]
    pub fn xmin(&self) -> i64 {
        self.inner.xmin()
    }

    #[getter]
    pub fn xmax(&self) -> i64 {
        self.inner.xmax()
    }

    #[getter]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[getter]
    pub fn xk<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        self.inner.xk().to_pyarray(py)
    }

    #[getter]
    pub fn pk<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.pk().to_pyarray(py)
    }

    // ---- Queries ----

    pub fn pmf(&self, x: i64) -> f64 {
        self.inner.pmf(x)
    }

    pub fn cdf(&self, x: i64) -> f64 {
        self.inner.cdf(x)
    }

    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    pub fn var(&self) -> f64 {
        self.inner.variance()
    }

    pub fn std(&self) -> f64 {
        self.inner.std()
    }

    pub fn cx(&self) -> f64 {
        self.inner.coefficient_of_variation()
    }

    pub fn skewness(&self) -> f64 {
        self.inner.skewness()
    }

    #[pyo3(signature = (base = 2.0))]
    pub fn entropy(&self, base: f64) -> PyResult<f64> {
        Ok(self.inner.entropy(base)?)
    }

    pub fn mode(&self) -> i64 {
        self.inner.mode()
    }

    #[pyo3(signature = (q = 0.95))]
    pub fn quantile(&self, q: f64) -> PyResult<i64> {
        Ok(self.inner.quantile(q)?)
    }

    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    pub fn normalize(&self) -> PyResult<Self> {
        Ok(self.inner.normalized()?.into())
    }

    pub fn jsd(&self, other: PyRef<'_, Self>) -> PyResult<f64> {
        Ok(distance::jensen_shannon(&self.inner, &other.inner)?)
    }

    pub fn tvd(&self, other: PyRef<'_, Self>) -> PyResult<f64> {
        Ok(distance::total_variation(&self.inner, &other.inner)?)
    }

    pub fn emd(&self, other: PyRef<'_, Self>) -> PyResult<f64> {
        Ok(distance::earth_movers(&self.inner, &other.inner)?)
    }

    // ---- Operators ----

    pub fn conv(&self, other: PyRef<'_, Self>) -> PyResult<Self> {
        Ok(algebra::convolve(&self.inner, &other.inner)?.into())
    }

    pub fn conv_neg(&self, other: PyRef<'_, Self>) -> PyResult<Self> {
        Ok(algebra::convolve_neg(&self.inner, &other.inner)?.into())
    }

    pub fn pi_op(&self, m: i64) -> Self {
        support::pi_fold(&self.inner, m).into()
    }

    pub fn pi0(&self) -> Self {
        support::pi_floor_zero(&self.inner).into()
    }

    #[pyo3(signature = (m, normalized = true))]
    pub fn sigma_lt(&self, m: i64, normalized: bool) -> PyResult<Self> {
        Ok(support::tail_lt(&self.inner, m, normalized)?.into())
    }

    #[pyo3(signature = (m, normalized = true))]
    pub fn sigma_geq(&self, m: i64, normalized: bool) -> PyResult<Self> {
        Ok(support::tail_geq(&self.inner, m, normalized)?.into())
    }

    #[pyo3(signature = (condition, normalized = true))]
    pub fn conditional(&self, condition: &Bound<'_, PyAny>, normalized: bool) -> PyResult<Self> {
        let mask = evaluate_condition(&self.inner, condition)?;
        let xmin = self.inner.xmin();
        let out = support::conditional(&self.inner, |x| mask[(x - xmin) as usize], normalized)?;
        Ok(out.into())
    }

    #[pyo3(signature = (normalize = true))]
    pub fn trim(&self, normalize: bool) -> Self {
        trim::trim_zeros(&self.inner, normalize).into()
    }

    #[pyo3(signature = (eps, normalize = true))]
    pub fn trim_pmf(&self, eps: f64, normalize: bool) -> PyResult<Self> {
        Ok(trim::trim_below(&self.inner, eps, normalize)?.into())
    }

    #[pyo3(signature = (eps, normalize = true))]
    pub fn trim_cdf(&self, eps: f64, normalize: bool) -> PyResult<Self> {
        Ok(trim::trim_cumulative(&self.inner, eps, normalize)?.into())
    }

    pub fn __add__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        if let Ok(d) = other.extract::<PyRef<'_, Self>>() {
            return Ok(algebra::add(&self.inner, &d.inner)?.into());
        }
        let k: i64 = other.extract().map_err(|_| operand_error("+"))?;
        Ok(algebra::add(&self.inner, k)?.into())
    }

    pub fn __radd__(&self, other: i64) -> PyResult<Self> {
        Ok(algebra::shift(&self.inner, other)?.into())
    }

    pub fn __sub__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        if let Ok(d) = other.extract::<PyRef<'_, Self>>() {
            return Ok(algebra::sub(&self.inner, &d.inner)?.into());
        }
        let k: i64 = other.extract().map_err(|_| operand_error("-"))?;
        Ok(algebra::sub(&self.inner, k)?.into())
    }

    pub fn __mul__(&self, k: i64) -> PyResult<Self> {
        Ok(algebra::scale(&self.inner, k)?.into())
    }

    pub fn __rmul__(&self, k: i64) -> PyResult<Self> {
        Ok(algebra::scale(&self.inner, k)?.into())
    }

    pub fn __neg__(&self) -> PyResult<Self> {
        Ok(algebra::negate(&self.inner)?.into())
    }

    pub fn __abs__(&self) -> PyResult<Self> {
        Ok(algebra::absolute(&self.inner)?.into())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[cfg(feature = "python-bindings")]
fn operand_error(op: &str) -> PyErr {
    PyTypeError::new_err(format!("unsupported operand for {op}: expected DiscreteDistribution or int"))
}

/// LindleyResult — Python-facing view of a [`LindleyOutcome`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "discrete_time.queueing")]
pub struct LindleyResult {
    pub inner: LindleyOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LindleyResult {
    #[getter]
    pub fn waiting_time(&self) -> PyDiscreteDistribution {
        self.inner.waiting_time.clone().into()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged()
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.to_string()
    }

    #[getter]
    pub fn mean_delta(&self) -> f64 {
        self.inner.mean_delta
    }
}

// ---- distribution submodule functions ----

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "max")]
fn py_max(dists: Vec<PyRef<'_, PyDiscreteDistribution>>) -> PyResult<PyDiscreteDistribution> {
    let refs: Vec<&DiscreteDistribution> = dists.iter().map(|d| &d.inner).collect();
    Ok(extremal::max_of(&refs)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "min")]
fn py_min(dists: Vec<PyRef<'_, PyDiscreteDistribution>>) -> PyResult<PyDiscreteDistribution> {
    let refs: Vec<&DiscreteDistribution> = dists.iter().map(|d| &d.inner).collect();
    Ok(extremal::min_of(&refs)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
fn bernoulli(p: f64) -> PyResult<PyDiscreteDistribution> {
    Ok(factories::bernoulli(p)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
fn binomial(n: u64, p: f64) -> PyResult<PyDiscreteDistribution> {
    Ok(factories::binomial(n, p)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (mean, eps = factories::DEFAULT_TAIL_EPS))]
fn poisson(mean: f64, eps: f64) -> PyResult<PyDiscreteDistribution> {
    Ok(factories::poisson(mean, eps)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (mean, cv, eps = factories::DEFAULT_TAIL_EPS))]
fn negative_binomial(mean: f64, cv: f64, eps: f64) -> PyResult<PyDiscreteDistribution> {
    Ok(factories::negative_binomial(mean, cv, eps)?.into())
}

/// Shifted geometric distribution; `p` takes precedence over `mean`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (mean = 1.0, p = None, shift = 0, eps = factories::DEFAULT_TAIL_EPS))]
fn geometric(mean: f64, p: Option<f64>, shift: i64, eps: f64) -> PyResult<PyDiscreteDistribution> {
    let d = match p {
        Some(p) => factories::geometric_with_p(p, shift, eps)?,
        None => factories::geometric(mean, shift, eps)?,
    };
    Ok(d.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
fn deterministic(x: i64) -> PyDiscreteDistribution {
    factories::deterministic(x).into()
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (a = 1, b = 10))]
fn discrete_uniform(a: i64, b: i64) -> PyResult<PyDiscreteDistribution> {
    Ok(factories::discrete_uniform(a, b)?.into())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (components, weights = None))]
fn mixture(
    components: Vec<PyRef<'_, PyDiscreteDistribution>>, weights: Option<Vec<f64>>,
) -> PyResult<PyDiscreteDistribution> {
    let refs: Vec<&DiscreteDistribution> = components.iter().map(|d| &d.inner).collect();
    Ok(factories::mixture(&refs, weights.as_deref())?.into())
}

// ---- queueing submodule functions ----

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (c, w0 = None, eps_prob = None, tol_mean = None, max_iter = Some(100_000)))]
fn lindley_equation(
    c: PyRef<'_, PyDiscreteDistribution>, w0: Option<PyRef<'_, PyDiscreteDistribution>>,
    eps_prob: Option<f64>, tol_mean: Option<f64>, max_iter: Option<usize>,
) -> PyResult<LindleyResult> {
    let opts = build_lindley_options(eps_prob, tol_mean, max_iter)?;
    let start = match &w0 {
        Some(w) => w.inner.clone(),
        None => factories::deterministic(0),
    };
    let inner = solve_lindley(&start, &c.inner, &opts)?;
    Ok(LindleyResult { inner })
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "gigi1_waiting_time",
    signature = (a, b, w0 = None, eps_prob = None, tol_mean = None, max_iter = Some(100_000))
)]
fn py_gigi1_waiting_time(
    a: PyRef<'_, PyDiscreteDistribution>, b: PyRef<'_, PyDiscreteDistribution>,
    w0: Option<PyRef<'_, PyDiscreteDistribution>>, eps_prob: Option<f64>,
    tol_mean: Option<f64>, max_iter: Option<usize>,
) -> PyResult<LindleyResult> {
    let opts = build_lindley_options(eps_prob, tol_mean, max_iter)?;
    let inner = gigi1_waiting_time(&a.inner, &b.inner, w0.as_ref().map(|w| &w.inner), &opts)?;
    Ok(LindleyResult { inner })
}

/// _discrete_time — PyO3 module initializer for the Python extension.
///
/// Creates the `distribution` and `queueing` submodules, attaches them to
/// the parent module and registers them in `sys.modules` so that dotted
/// imports work from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _discrete_time<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let distribution_mod = PyModule::new(py, "distribution")?;
    let queueing_mod = PyModule::new(py, "queueing")?;
    distribution_module(m, &distribution_mod)?;
    queueing_module(m, &queueing_mod)?;

    let modules = py.import("sys")?.getattr("modules")?;
    modules.set_item("discrete_time.distribution", distribution_mod)?;
    modules.set_item("discrete_time.queueing", queueing_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn distribution_module<'py>(
    parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyDiscreteDistribution>()?;
    m.add_function(wrap_pyfunction!(py_max, m)?)?;
    m.add_function(wrap_pyfunction!(py_min, m)?)?;
    m.add_function(wrap_pyfunction!(bernoulli, m)?)?;
    m.add_function(wrap_pyfunction!(binomial, m)?)?;
    m.add_function(wrap_pyfunction!(poisson, m)?)?;
    m.add_function(wrap_pyfunction!(negative_binomial, m)?)?;
    m.add_function(wrap_pyfunction!(geometric, m)?)?;
    m.add_function(wrap_pyfunction!(deterministic, m)?)?;
    m.add_function(wrap_pyfunction!(discrete_uniform, m)?)?;
    m.add_function(wrap_pyfunction!(mixture, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn queueing_module<'py>(parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<LindleyResult>()?;
    m.add_function(wrap_pyfunction!(lindley_equation, m)?)?;
    m.add_function(wrap_pyfunction!(py_gigi1_waiting_time, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
