//! Error types for the catalog and data model

/// Catalog and data-model errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No instrument with this key
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    /// Name or class is blank after trimming
    #[error("identity requires a non-empty {field}")]
    BlankIdentity {
        /// Which field was blank (`name` or `class`)
        field: &'static str,
    },

    /// Unknown rank slot label
    #[error("unknown rank slot: {0}")]
    UnknownRankSlot(String),
}
