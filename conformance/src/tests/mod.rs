//! Test fixtures shared by the unit tests and the stub-server integration
//! tests.

pub mod fixtures;
