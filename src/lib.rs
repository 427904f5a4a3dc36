// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;
pub mod scrape;

pub mod data;
pub mod store;
pub mod view;
pub mod session;
pub mod file;
pub mod progress;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
