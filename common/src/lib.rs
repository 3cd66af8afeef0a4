//! Common utilities for the portfolio application
//!
//! This crate provides the shared graphics setup and camera types used by
//! the portfolio's animated background.

pub mod camera;
pub mod graphics;

pub use camera::*;
pub use graphics::*;
