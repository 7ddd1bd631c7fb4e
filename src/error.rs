use thiserror::Error;

/// Errors surfaced by a [`VehicleStore`](crate::VehicleStore).
///
/// Missing records are not errors; lookups return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("vehicle store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
