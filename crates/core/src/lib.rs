//! Core types and helpers for case-tracker
//!
//! This crate contains domain types shared across all other crates.

mod case;
mod constants;
mod env_config;
mod extraction;
mod json_utils;

pub use case::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use extraction::*;
pub use json_utils::{strip_markdown_json, truncate};
