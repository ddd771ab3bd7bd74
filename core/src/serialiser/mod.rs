//! serialiser/mod.rs
//! Public façade: build a trace set, add headers and traces, render or save.

pub mod core;
pub mod setters;
pub mod io;

pub use self::core::*;
