// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Locates the repository that exports and configuration are written into.

mod repo;

pub use repo::{is_git_repo, repository_root, Repository};
