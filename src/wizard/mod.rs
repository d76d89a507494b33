//! Host sessions
//!
//! Drive the pure domain state against a [`SyllabusBackend`], keeping the
//! cursor and annotations untouched whenever a backend call fails.
//!
//! [`SyllabusBackend`]: crate::backend::SyllabusBackend

mod context;
mod review;
mod session;

pub use context::SessionContext;
pub use review::ReviewSession;
pub use session::{NextOutcome, WizardSession};
