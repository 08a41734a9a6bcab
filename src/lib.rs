//! Fleet: Interactive Vehicle Collection Console
//!
//! An in-memory, keyed vehicle collection managed through an interactive command
//! shell. Data-entry commands drive a validated field-prompt loop that re-asks
//! until every field satisfies its constraint.

pub mod collection;
pub mod commands;
pub mod console;
pub mod error;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod tooling;
