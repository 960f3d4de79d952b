//! Best-fit section line through a point set.
//!
//! A perpendicular least-squares fit is reached by repeatedly rotating the
//! frame until the ordinary least-squares slope vanishes:
//!
//! 1. **Regression**: [`fit_ols`] fits `y = a·x + b` in the current frame
//! 2. **Rotation**: the frame turns by `atan(a)`
//! 3. **Iteration**: repeat until the turn is below 1°, the angular bound
//!    is hit, or the round cap runs out
//!
//! Vertical regressions are recovered by nudging the frame, never surfaced.

mod config;
mod regression;
mod solver;

pub use config::FitConfig;
pub use regression::{fit_ols, LinearFit};
pub use solver::{BestFitLine, BestFitSolver, FitTermination};
