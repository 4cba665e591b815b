//! lazylinear - Terminal dashboard for browsing and filtering Linear issues
//!
//! This library crate exposes internal modules for integration testing.

pub mod config;
pub mod data;
pub mod integrations;
pub mod tui;
