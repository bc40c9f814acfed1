//! Guidance Store
//!
//! Persistence capability for the class registry, per-student results and
//! the last-identified user.
//!
//! # Adapters
//!
//! - [`LocalStore`]: one JSON snapshot file, written atomically
//! - [`RemoteStore`]: HTTP key-value bucket addressed by identity token
//! - [`MirroredStore`]: local first (authoritative), then remote
//!
//! Every adapter implements [`PersistenceAdapter`]. Callers treat failures as
//! non-fatal: local state stays authoritative and a failed sync is reported
//! through [`PersistenceError::is_remote`].
//!
//! # Example
//!
//! ```rust,no_run
//! use guidance_catalog::{Registry, StudentIdentity};
//! use guidance_store::{LocalStore, PersistenceAdapter};
//!
//! # async fn run() -> Result<(), guidance_store::PersistenceError> {
//! let store = LocalStore::in_dir("./data");
//! let mut registry = store.load_registry().await?;
//! registry.register("3/1", "Somchai").ok();
//! store.save_registry(&registry).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod error;
pub mod local;
pub mod mirrored;
pub mod remote;

// Re-exports
pub use adapter::PersistenceAdapter;
pub use error::PersistenceError;
pub use local::{LocalStore, Snapshot, SNAPSHOT_FILE};
pub use mirrored::MirroredStore;
pub use remote::{RemoteConfig, RemoteStore};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for persistence
    pub use crate::{
        LocalStore, MirroredStore, PersistenceAdapter, PersistenceError, RemoteConfig,
        RemoteStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
