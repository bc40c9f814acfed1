//! Persistence capability

use crate::error::PersistenceError;
use async_trait::async_trait;
use guidance_catalog::{IdentityKey, Registry, ResultSet, StudentIdentity};

/// Storage for the registry, per-student results and the last-identified user
///
/// Implementations must be cheap to call repeatedly; callers load on
/// identification and save after every completed instrument.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Load the class registry (empty when nothing was stored)
    async fn load_registry(&self) -> Result<Registry, PersistenceError>;

    /// Store the class registry
    async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError>;

    /// Load the results stored for `key`
    async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError>;

    /// Store the results of `key`
    async fn save_results(&self, key: &IdentityKey, results: &ResultSet)
        -> Result<(), PersistenceError>;

    /// Last identified user, if the adapter remembers one
    async fn last_user(&self) -> Result<Option<StudentIdentity>, PersistenceError> {
        Ok(None)
    }

    /// Remember the last identified user
    async fn remember_user(&self, _user: &StudentIdentity) -> Result<(), PersistenceError> {
        Ok(())
    }

    /// Forget the last identified user
    async fn forget_user(&self) -> Result<(), PersistenceError> {
        Ok(())
    }
}

#[async_trait]
impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<P> {
    async fn load_registry(&self) -> Result<Registry, PersistenceError> {
        (**self).load_registry().await
    }

    async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError> {
        (**self).save_registry(registry).await
    }

    async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError> {
        (**self).load_results(key).await
    }

    async fn save_results(
        &self,
        key: &IdentityKey,
        results: &ResultSet,
    ) -> Result<(), PersistenceError> {
        (**self).save_results(key, results).await
    }

    async fn last_user(&self) -> Result<Option<StudentIdentity>, PersistenceError> {
        (**self).last_user().await
    }

    async fn remember_user(&self, user: &StudentIdentity) -> Result<(), PersistenceError> {
        (**self).remember_user(user).await
    }

    async fn forget_user(&self) -> Result<(), PersistenceError> {
        (**self).forget_user().await
    }
}
