//! codec/mod.rs
//! Header value encoding (typed scalar or text -> minimal bytes).

pub mod encode;

pub use encode::*;
