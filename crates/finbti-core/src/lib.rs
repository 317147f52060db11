//! finbti-core
//!
//! Pure computations over finbti-domain: MBTI scoring, ledger grouping, goal
//! progress and input formatting. No CLI, no terminal I/O, no storage.

pub mod error;
pub mod format;
pub mod goal_service;
pub mod ledger_service;
pub mod mbti_service;
pub mod profile;
pub mod time;

pub use error::CoreError;
pub use format::*;
pub use goal_service::*;
pub use ledger_service::*;
pub use mbti_service::*;
pub use profile::*;
pub use time::*;

#[cfg(test)]
mod tests;
