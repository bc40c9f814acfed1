//! Local store mirrored to a remote one
//!
//! Writes go to the local side first; only once that succeeded is the remote
//! side written. A remote failure is returned as a remote-classified error so
//! the caller can mark the session out of sync while keeping local state.
//! Loads merge both sides, local entries winning.

use crate::adapter::PersistenceAdapter;
use crate::error::PersistenceError;
use crate::local::LocalStore;
use crate::remote::RemoteStore;
use async_trait::async_trait;
use guidance_catalog::{IdentityKey, Registry, ResultSet, StudentIdentity};

/// Local-then-remote adapter
#[derive(Debug)]
pub struct MirroredStore<L = LocalStore, R = RemoteStore> {
    local: L,
    remote: R,
}

impl<L: PersistenceAdapter, R: PersistenceAdapter> MirroredStore<L, R> {
    /// Mirror `local` to `remote`
    pub fn new(local: L, remote: R) -> Self {
        Self { local, remote }
    }

    /// Authoritative side
    #[inline]
    pub fn local(&self) -> &L {
        &self.local
    }

    /// Mirror side
    #[inline]
    pub fn remote(&self) -> &R {
        &self.remote
    }
}

#[async_trait]
impl<L: PersistenceAdapter, R: PersistenceAdapter> PersistenceAdapter for MirroredStore<L, R> {
    async fn load_registry(&self) -> Result<Registry, PersistenceError> {
        let mut registry = self.local.load_registry().await?;
        match self.remote.load_registry().await {
            Ok(remote) => registry.merge(&remote),
            Err(e) => tracing::warn!(error = %e, "remote registry unavailable, using local copy"),
        }
        Ok(registry)
    }

    async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError> {
        self.local.save_registry(registry).await?;
        self.remote
            .save_registry(registry)
            .await
            .map_err(PersistenceError::into_remote)
    }

    async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError> {
        let local = self.local.load_results(key).await?;
        let remote = match self.remote.load_results(key).await {
            Ok(remote) => remote,
            Err(e) => {
                tracing::warn!(%key, error = %e, "remote results unavailable, using local copy");
                None
            }
        };
        Ok(match (local, remote) {
            (Some(mut local), Some(remote)) => {
                local.merge_missing(&remote);
                Some(local)
            }
            (local, remote) => local.or(remote),
        })
    }

    async fn save_results(
        &self,
        key: &IdentityKey,
        results: &ResultSet,
    ) -> Result<(), PersistenceError> {
        self.local.save_results(key, results).await?;
        self.remote
            .save_results(key, results)
            .await
            .map_err(PersistenceError::into_remote)
    }

    async fn last_user(&self) -> Result<Option<StudentIdentity>, PersistenceError> {
        self.local.last_user().await
    }

    async fn remember_user(&self, user: &StudentIdentity) -> Result<(), PersistenceError> {
        self.local.remember_user(user).await
    }

    async fn forget_user(&self) -> Result<(), PersistenceError> {
        self.local.forget_user().await
    }
}
