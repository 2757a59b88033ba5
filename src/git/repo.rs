// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::{GitError, PolicyError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// A repository's working directory.
#[derive(Debug, Clone)]
pub struct Repository {
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository enclosing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                PolicyError::Git(GitError::NotARepository)
            } else {
                PolicyError::Git(GitError::from(e))
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                PolicyError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self { workdir })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

/// Get the working directory of the repository enclosing `start`.
pub fn repository_root(start: &Path) -> Result<PathBuf> {
    let repo = Repository::open(start)?;
    tracing::debug!("Repository root: {:?}", repo.workdir());
    Ok(repo.workdir().to_path_buf())
}

/// Check whether `path` is inside a git repository.
pub fn is_git_repo(path: &Path) -> bool {
    Git2Repo::discover(path).is_ok()
}
