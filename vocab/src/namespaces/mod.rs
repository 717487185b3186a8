//! OSLC domain modules.
//!
//! Each sub-module encodes the resource shapes of one OSLC specification as
//! Rust static data. Modules are listed in suite execution order; see
//! [`crate::Vocabulary::full`] for the assembly sequence.

pub mod oslc;
pub mod cm;
pub mod am;
pub mod auto;
pub mod rm;
pub mod pm;
pub mod trs;
