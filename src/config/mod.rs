// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-policy.
//!
//! This module handles loading and checking the optional tool
//! configuration file, and applying its rule overrides to the project policy.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    validate_overrides, CONFIG_FILES,
};
pub use schema::*;
