//! Interactive die-fairness sessions.
//!
//! Collects roll entries one line at a time, renders a bar-chart report with
//! per-face chi-squared contributions, and loops until the user stops. The
//! session never touches a terminal directly: callers feed it input lines
//! and print whatever it returns.

pub mod collector;
pub mod config;
pub mod error;
pub mod guidance;
pub mod report;
pub mod session;

pub use collector::{RollCollector, RollEntry};
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use report::render_report;
pub use session::{DieSession, Phase};
