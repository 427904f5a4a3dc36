// src/core/mod.rs

pub mod net;
pub mod sanitize;

pub use net::{FetchError, HttpSource};
