//! Guidance Session
//!
//! Drives one student session: the view state machine, identity resolution,
//! answer collection for one instrument at a time and the hand-off of
//! completed answers to persistence.
//!
//! # Architecture
//!
//! ```text
//! Navigator ──► Questionnaire ──► AnswerSet
//!     │                              │
//!     ├──► SessionStore ◄────────────┘
//!     └──► PersistenceAdapter (local / mirrored)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use guidance_session::{GuidanceConfig, Navigator};
//! use guidance_store::LocalStore;
//!
//! # async fn run() -> Result<(), guidance_session::NavigationError> {
//! let config = GuidanceConfig::new().with_classes(["3/1"]);
//! let store = LocalStore::in_dir(&config.data_dir);
//! let mut nav = Navigator::new(store, config.seed_registry()).await;
//! nav.give_consent();
//! nav.begin()?;
//! nav.open_registration()?;
//! nav.register_and_identify("3/1", "Somchai").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod navigation;
pub mod questionnaire;
pub mod session_store;

// Re-exports
pub use config::{ConfigError, GuidanceConfig};
pub use controller::{CatalogEntry, Navigator, StartOutcome, SyncStatus};
pub use error::{NavigationError, ValidationError};
pub use navigation::{allowed_transitions, validate_transition, View};
pub use questionnaire::{
    AdvanceOutcome, CurrentAnswer, Progress, QuestionView, Questionnaire, QuestionnaireState,
};
pub use session_store::SessionStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a session
    pub use crate::{
        AdvanceOutcome, GuidanceConfig, NavigationError, Navigator, StartOutcome, SyncStatus,
        ValidationError, View,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
