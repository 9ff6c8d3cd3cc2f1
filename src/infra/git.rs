use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::{RepoHandle, VersionControl};

/// Version control backed by the `git` binary.
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    async fn git(&self, dir: &Path, args: &[&str]) -> AppResult<Output> {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))
    }
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

#[async_trait]
impl VersionControl for GitCli {
    async fn list_repositories(&self) -> AppResult<Vec<RepoHandle>> {
        let output = self.git(&self.cwd, &["rev-parse", "--show-toplevel"]).await?;
        if !output.status.success() {
            return Ok(Vec::new());
        }
        let root = stdout_line(&output);
        if root.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![RepoHandle {
            root: PathBuf::from(root),
        }])
    }

    async fn current_branch(&self, repo: &RepoHandle) -> AppResult<Option<String>> {
        let output = self
            .git(&repo.root, &["branch", "--show-current"])
            .await?;
        if !output.status.success() {
            return Err(AppError::VersionControl(format!(
                "git branch --show-current failed: {}",
                stderr_line(&output)
            )));
        }
        let name = stdout_line(&output);
        Ok(if name.is_empty() { None } else { Some(name) })
    }

    async fn create_and_checkout(&self, repo: &RepoHandle, branch: &BranchName) -> AppResult<()> {
        let output = self
            .git(&repo.root, &["checkout", "-b", branch.as_str()])
            .await?;
        if !output.status.success() {
            return Err(AppError::VersionControl(format!(
                "git checkout -b {} failed: {}",
                branch,
                stderr_line(&output)
            )));
        }
        Ok(())
    }
}
