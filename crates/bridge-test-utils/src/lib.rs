//! Shared test utilities for the matlab-bridge workspace.
//!
//! This crate provides fixtures for resource bundles and engine libraries.
//! It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`bundle`]: [`TestBundle`] builder producing packed and unpacked bundles
//! - [`engine`]: fake MATLAB engine libraries

pub mod bundle;
pub mod engine;

pub use bundle::TestBundle;
pub use engine::write_engine_jar;
