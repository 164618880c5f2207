//! Nordic installer - a terminal installation wizard rendered with gum
//!
//! This library provides the widget model, the vertical layout and render
//! pass, the backend that hands widgets to gum, and the installer screens
//! built on top of them.

pub mod backend;
pub mod component;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod render;
pub mod theme;

pub use error::{Error, Result};
