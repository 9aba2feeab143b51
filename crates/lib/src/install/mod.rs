//! Dependency installation.
//!
//! Brings the host (or an existing local virtualenv) to a state where the
//! audio-manipulation library and the native codec packages it depends on are
//! available. The flow is plan first, then run: [`compute_plan`] produces the
//! ordered command sequence for the classified platform, and [`run_plan`]
//! executes it step by step, aggregating per-step outcomes into an
//! [`InstallReport`].

mod plan;
mod run;
mod types;

pub use plan::compute_plan;
pub use run::run_plan;
pub use types::{InstallError, InstallPlan, InstallReport, InstallStep, StepKind, StepOutcome};
