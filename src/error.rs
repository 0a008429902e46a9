//! Error type for AES-GCM operations.
//!
//! The primitive only ever fails in one of two ways: a caller passed a
//! syntactically invalid argument (wrong key length, zero-length IV, wrong
//! tag length), or a decryption's authentication tag did not match. There is
//! no third "something went wrong internally" variant in the public surface
//! — an internal inconsistency is a logic bug, not a runtime condition a
//! caller can recover from, and is handled by `unreachable!()` at the call
//! site instead of being wrapped into a `Result`.

use thiserror::Error;

/// Errors produced by [`crate::AesGcm`] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A syntactic precondition was violated: wrong key length at `init`,
    /// a zero-length IV, a plaintext exceeding the GCM length limit, or a
    /// tag that isn't 16 bytes.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Decryption's computed tag did not match the supplied tag. The
    /// caller's output buffer has already been zeroed; do not read it.
    #[error("authentication failed")]
    AuthFailure,
}

pub type Result<T> = core::result::Result<T, Error>;
