//! Storage errors shared by the in-memory repositories.

use thiserror::Error;

/// Failure inside a repository implementation.
///
/// The in-memory repositories guard their maps with `std::sync` locks; a
/// writer that panicked mid-update poisons the lock, and the poisoning is
/// surfaced as an error instead of propagating the panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// A repository lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}
