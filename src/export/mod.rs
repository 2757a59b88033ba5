// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Export module.
//!
//! Renders a policy into the configuration files the commit linter loads.

mod format;
mod render;

pub use format::ExportFormat;
pub use render::{render, write};
