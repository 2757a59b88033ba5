// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commit-policy.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;
mod report;

pub use args::{Cli, Commands};
pub use dispatch::run;
