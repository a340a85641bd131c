//! queueing — discrete-time waiting-time analysis for single-server queues.
//!
//! Purpose
//! -------
//! Solve the Lindley equation `W = π₀(W + C)` by fixed-point iteration on
//! finite discrete distributions and wrap it into a GI/GI/1 facade that
//! builds the increment `C = B - A` from interarrival and service times.
//!
//! Key behaviors
//! -------------
//! - [`solve_lindley`]: capped fixed-point loop returning a
//!   [`LindleyOutcome`] with a [`LindleyStatus`].
//! - [`gigi1_waiting_time`]: stability check (`ρ < 1`) followed by the solver.
//! - [`LindleyOptions`]: validated solver configuration with documented
//!   defaults.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs to the solver carry unit mass; the iterates may lose up to
//!   `eps_prob` per trimmed end position and are not renormalized.
//! - Convergence is judged on the mean only.
//!
//! Conventions
//! -----------
//! - Errors are reported via [`QueueError`] / [`QueueResult`]; distribution
//!   errors are wrapped through `From<DistError>`.
//! - Progress is reported through `tracing` events; the library installs no
//!   subscriber.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; `tests/integration_gigi1_pipeline.rs`
//!   runs end-to-end GI/GI/1 scenarios.

pub mod errors;
pub mod gigi1;
pub mod lindley;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{QueueError, QueueResult};
pub use self::gigi1::{gigi1_waiting_time, utilization};
pub use self::lindley::{LindleyOutcome, LindleyStatus, solve_lindley};
pub use self::options::LindleyOptions;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use discrete_time::queueing::prelude::*;
//
// to import the solver surface in a single line.

pub mod prelude {
    pub use super::errors::{QueueError, QueueResult};
    pub use super::gigi1::{gigi1_waiting_time, utilization};
    pub use super::lindley::{LindleyOutcome, LindleyStatus, solve_lindley};
    pub use super::options::LindleyOptions;
}
