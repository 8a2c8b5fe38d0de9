//! Turns parsed view declarations into Transforms and compiles those into
//! `CREATE OR REPLACE VIEW` statements or build artifacts.

pub mod emit;
pub mod interpret;
pub mod query;
pub mod session;
pub mod settings;

pub use interpret::{Interpretation, interpret};
pub use session::{DeclarationId, Session};
