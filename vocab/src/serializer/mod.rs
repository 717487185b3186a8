//! Serializers for the OSLC vocabulary.
//!
//! - **Turtle** ([`turtle`]): every shape as an `oslc:ResourceShape`
//!   document, suitable for publishing next to a server under test or for
//!   diffing against a server's own shapes.

pub mod turtle;
