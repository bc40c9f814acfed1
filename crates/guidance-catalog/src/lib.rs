//! Guidance Catalog
//!
//! The five fixed assessment instruments and the data model shared by the
//! rest of the workspace.
//!
//! # Overview
//!
//! - **Instrument**: immutable definition (questions, options, scoring metadata)
//! - **AnswerSet**: raw responses for one instrument, typed per instrument kind
//! - **StudentIdentity**: trimmed `(name, class)` pair and its storage key
//! - **Registry**: class-scoped, append-only roster of names
//! - **ResultSet**: completed answer sets of one student
//!
//! # Example
//!
//! ```rust
//! use guidance_catalog::{catalog, InstrumentKey, InstrumentKind};
//!
//! let riasec = catalog::get(InstrumentKey::Riasec);
//! assert_eq!(riasec.kind, InstrumentKind::LinearScale);
//! assert_eq!(riasec.question_count(), 54);
//! ```

#![warn(missing_docs)]

pub mod answer;
pub mod catalog;
mod data;
pub mod error;
pub mod identity;
pub mod instrument;
pub mod registry;
pub mod results;

// Re-exports
pub use answer::{AnswerSet, RankSlot, RankedChoice};
pub use error::CatalogError;
pub use identity::{IdentityKey, StudentIdentity};
pub use instrument::{
    Dimension, EqProfile, Instrument, InstrumentKey, InstrumentKind, OptionSet, ReferenceRange,
    SubDimension,
};
pub use registry::Registry;
pub use results::ResultSet;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the catalog
    pub use crate::{
        catalog, AnswerSet, IdentityKey, Instrument, InstrumentKey, InstrumentKind, RankSlot,
        RankedChoice, Registry, ResultSet, StudentIdentity,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
