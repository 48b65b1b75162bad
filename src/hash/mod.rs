// Copyright (C) Microsoft Corporation. All rights reserved.

//! Base hash engine for the authentication algorithms.
//!
//! This module defines the narrow interface the authentication layer consumes
//! from the underlying compression-function hash: reset, incremental update,
//! finalization to a fixed 20-byte digest, and duplication of a mid-stream
//! state. Duplication is what lets a keyed context restart cheaply without
//! redoing its key schedule.
//!
//! # Platform Support
//!
//! Linux builds use the OpenSSL-backed engine. Other targets are rejected at
//! compile time.

use super::*;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod sha1_ossl;

        pub use sha1_ossl::OsslSha1;

        /// Default SHA-1 engine for the current platform.
        pub type Sha1 = sha1_ossl::OsslSha1;
    } else {
        compile_error!("Unsupported target OS for the SHA-1 hash backend");
    }
}

/// Native digest size of the base hash, in bytes.
pub const SHA1_DIGEST_LEN: usize = 20;

/// Internal block size of the base hash, in bytes.
pub const SHA1_BLOCK_LEN: usize = 64;

/// Incrementally-updatable hash engine with a fixed 20-byte digest.
///
/// Engines are `Clone`: cloning duplicates the full running state, so the
/// clone and the original continue independently from the same prefix. The
/// authentication layer relies on this to snapshot a keyed state once and
/// restart from it per message.
pub trait HashEngine: Clone {
    /// Creates a fresh engine with no bytes absorbed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFail` if the backend cannot construct a
    /// digest context.
    fn new() -> Result<Self, AuthError>;

    /// Discards all absorbed bytes and returns the engine to its initial
    /// state.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFail` if the backend cannot reinitialize.
    fn reset(&mut self) -> Result<(), AuthError>;

    /// Absorbs `data` into the running state.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFail` if the backend update fails.
    fn update(&mut self, data: &[u8]) -> Result<(), AuthError>;

    /// Finalizes the running state and returns the 20-byte digest.
    ///
    /// The engine must be reset before it can absorb a new stream.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFail` if the backend finalization fails.
    fn finish(&mut self) -> Result<[u8; SHA1_DIGEST_LEN], AuthError>;
}

#[cfg(test)]
mod tests;
