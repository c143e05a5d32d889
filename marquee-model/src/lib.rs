//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod movie;

pub use movie::{Movie, NewMovie};
