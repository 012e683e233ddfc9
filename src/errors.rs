//! Unified error types and result handling.
//!
//! Domain errors carry user-presentable `Display` messages; transport errors
//! (`Io`, `Json`, ...) wrap whatever the storage layer raised and propagate
//! unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The player name was empty after trimming.
    #[error("player name is empty")]
    EmptyName,

    /// A player with the same name (compared case-insensitively) already
    /// exists in the category table.
    #[error("player '{name}' already exists in category '{category}'")]
    DuplicatePlayer { name: String, category: String },

    /// No row in the category table matches the player name.
    #[error("player '{name}' not found in category '{category}'")]
    PlayerNotFound { name: String, category: String },

    /// Payment text still contained non-digit characters after stripping
    /// thousands separators.
    #[error("invalid amount '{input}': use digits only, e.g. 50000")]
    InvalidAmount { input: String },

    /// The month label did not match any of the twelve fixed labels.
    #[error("unknown month '{input}'")]
    UnknownMonth { input: String },

    /// The category is not in the configured category list.
    #[error("unknown category '{category}'")]
    UnknownCategory { category: String },

    /// The roster document id was empty after trimming.
    #[error("document id is empty")]
    EmptyDocument,

    /// A roster record with the same document id already exists.
    #[error("a roster record with document '{document}' already exists")]
    DuplicateDocument { document: String },

    /// No roster record matches the document id.
    #[error("no roster record with document '{document}'")]
    DocumentNotFound { document: String },

    /// A stored table does not fit the typed record it maps to.
    #[error("table '{table}': {message}")]
    Schema { table: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
