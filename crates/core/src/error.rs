use alloc::collections::TryReserveError;

use icu_locale_core::Locale;
use thiserror::Error;

/// Growth of an owned buffer or collection could not be satisfied.
///
/// Every operation returning this error leaves the structure it was called on
/// exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The next capacity would not fit in `usize`.
    #[error("capacity overflow")]
    Overflow,

    /// The allocator refused the request.
    #[error("allocation failed")]
    Allocation,
}

impl From<TryReserveError> for CapacityError {
    fn from(_: TryReserveError) -> Self {
        Self::Allocation
    }
}

impl From<hashbrown::TryReserveError> for CapacityError {
    fn from(e: hashbrown::TryReserveError) -> Self {
        match e {
            hashbrown::TryReserveError::CapacityOverflow => Self::Overflow,
            hashbrown::TryReserveError::AllocError { .. } => Self::Allocation,
        }
    }
}

pub type Result<T> = core::result::Result<T, CapacityError>;

/// Reordering the word records failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error("no collation data for locale `{0}`")]
    Collation(Locale),
}
