use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    pub root: PathBuf,
}

#[async_trait]
pub trait VersionControl: Send + Sync {
    async fn list_repositories(&self) -> AppResult<Vec<RepoHandle>>;

    /// `None` when the repository has no current branch (detached HEAD,
    /// unborn branch).
    async fn current_branch(&self, repo: &RepoHandle) -> AppResult<Option<String>>;

    async fn create_and_checkout(&self, repo: &RepoHandle, branch: &BranchName) -> AppResult<()>;
}
