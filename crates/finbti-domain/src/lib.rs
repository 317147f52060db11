//! finbti-domain
//!
//! Pure domain models (trait axes, questionnaire, goals, ledger records and
//! their view models). No I/O, no CLI, no storage. Only data types and enums.

pub mod common;
pub mod goal;
pub mod question;
pub mod score;
pub mod trait_axis;
pub mod transaction;

pub use common::*;
pub use goal::*;
pub use question::*;
pub use score::*;
pub use trait_axis::*;
pub use transaction::*;
