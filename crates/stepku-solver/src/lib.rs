//! Stepwise solving for Stepku.
//!
//! Two pieces on top of [`stepku_core`]:
//!
//! - [`eliminate_naked_subsets`]: one pass of the solver's single
//!   propagation rule over all 27 groups
//! - [`StepSolver`]: the search controller that owns a stack of board
//!   snapshots and advances the search by exactly one decision per
//!   [`step`](StepSolver::step) call — eliminate, branch on a guess, or
//!   retract one
//!
//! One decision per call is the point: a render loop can animate the search,
//! a test can single-step it, and a batch caller just loops until `step`
//! returns `false` and reads off the [`SolverState`].

pub use self::{
    propagate::eliminate_naked_subsets,
    solver::{SolverState, StepSolver},
};

mod propagate;
mod solver;
