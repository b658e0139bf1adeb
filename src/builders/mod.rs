//! # Builders
//!
//! - [`message_builder`] - configurable front end for message encryption
//!
//! The free functions at the crate root are the builder's defaults.

pub mod message_builder;
