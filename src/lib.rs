//! Terminal front end for the battle core in the `combat` crate.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
