// Copyright (C) Microsoft Corporation. All rights reserved.

//! Authentication algorithm interface.
//!
//! This module defines the fixed operation set every authentication
//! algorithm in the family exposes, the static descriptor that makes an
//! algorithm selectable by identifier, and the known-answer self-test
//! protocol run against each descriptor's embedded vectors.
//!
//! # Lifecycle
//!
//! A caller resolves an [`AuthType`] through the registry, allocates a
//! context with the session's key and tag lengths, initializes it with the
//! secret key, and then per message calls start, zero or more updates, and
//! finally compute to obtain the truncated tag. Contexts are single-owner
//! and not safe for concurrent use; independent contexts share no state.

use super::*;

mod registry;

pub use registry::*;

/// Identifier selecting one algorithm out of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthTypeId {
    /// No-op authentication producing empty tags.
    Null,
    /// HMAC over SHA-1 with truncated output.
    HmacSha1,
}

/// Known-answer vector embedded in an algorithm descriptor.
///
/// Running allocate → initialize → start → compute over `key` and `data`
/// must reproduce `tag` exactly for the algorithm to be considered
/// trustworthy.
#[derive(Debug, Clone, Copy)]
pub struct AuthTestVector {
    /// Secret key, at most the algorithm's maximum key length.
    pub key: &'static [u8],
    /// Message to authenticate.
    pub data: &'static [u8],
    /// Expected tag; its length is the requested truncation.
    pub tag: &'static [u8],
}

/// Per-context authentication operations.
///
/// A context is created by its descriptor's [`AuthType::alloc`], owns its
/// secret-derived state exclusively, and zeroizes that state when dropped.
pub trait AuthContext {
    /// Derives the context's pad state from `key` and primes the running
    /// state for the first message.
    ///
    /// A context may be re-keyed by calling this again; all state derived
    /// from the previous key is replaced.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BadParam` if the key is longer than the
    /// algorithm's limit, or `AuthError::AuthFail` if the hash engine
    /// cannot be constructed or primed.
    fn init(&mut self, key: &[u8]) -> Result<(), AuthError>;

    /// Resets the running state to the keyed initial state.
    ///
    /// Callable repeatedly; any live running state is released first. Must
    /// be called between messages, since compute consumes the running
    /// state.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFail` if there is no keyed state to
    /// duplicate or duplication fails. The keyed state itself is never
    /// corrupted; the caller may retry.
    fn start(&mut self) -> Result<(), AuthError>;

    /// Feeds a message fragment into the running state.
    ///
    /// Pure accumulation; callable any number of times, including zero,
    /// between start and compute.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFail` if the context has no running state.
    fn update(&mut self, message: &[u8]) -> Result<(), AuthError>;

    /// Feeds the final fragment, finalizes, and writes the truncated tag
    /// into `tag`.
    ///
    /// The length of `tag` is the requested truncation. The running state
    /// is consumed; call [`AuthContext::start`] before the next message.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BadParam` if `tag` is longer than the
    /// algorithm's native digest, or `AuthError::AuthFail` if the context
    /// has no running state.
    fn compute(&mut self, message: &[u8], tag: &mut [u8]) -> Result<(), AuthError>;

    /// Key length the context was allocated for, in bytes.
    fn key_len(&self) -> usize;

    /// Tag length the context was allocated for, in bytes.
    fn tag_len(&self) -> usize;
}

/// Static, capability-describing record for one algorithm.
///
/// Descriptors are immutable process-wide data; one static instance exists
/// per algorithm and is handed out by the registry. Callers never name a
/// concrete context type directly.
pub trait AuthType: Send + Sync {
    /// Identifier this descriptor is registered under.
    fn id(&self) -> AuthTypeId;

    /// Human-readable description of the algorithm.
    fn description(&self) -> &'static str;

    /// Embedded known-answer vectors for the self-test protocol.
    fn test_data(&self) -> &'static [AuthTestVector];

    /// Allocates a fresh context for the given key and tag lengths.
    ///
    /// The returned context has no pad state yet; it must be initialized
    /// with the secret key before use.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BadParam` if either length exceeds the
    /// algorithm's limit, or `AuthError::AllocFail` if context memory
    /// cannot be acquired.
    fn alloc(&self, key_len: usize, tag_len: usize) -> Result<Box<dyn AuthContext>, AuthError>;
}

/// Runs the known-answer self-test for one algorithm.
///
/// Every embedded vector is driven through allocate → initialize → start →
/// compute and the produced tag compared byte-for-byte against the expected
/// one. All vectors must pass.
///
/// # Errors
///
/// Returns `AuthError::AuthFail` on the first tag mismatch, or any error
/// the operations themselves report.
pub fn self_test(auth: &dyn AuthType) -> Result<(), AuthError> {
    for vector in auth.test_data() {
        let mut context = auth.alloc(vector.key.len(), vector.tag.len())?;
        context.init(vector.key)?;
        context.start()?;

        let mut tag = vec![0u8; vector.tag.len()];
        context.compute(vector.data, &mut tag)?;

        if tag != vector.tag {
            tracing::trace!(
                description = auth.description(),
                expected = %hex::encode(vector.tag),
                actual = %hex::encode(&tag),
                "self-test vector mismatch"
            );
            return Err(AuthError::AuthFail);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
