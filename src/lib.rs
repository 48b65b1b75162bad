// Copyright (C) Microsoft Corporation. All rights reserved.

//! Per-packet authentication primitives for secure transports.
//!
//! This crate provides the message-authentication layer of a secure-transport
//! stack as a family of interchangeable algorithms behind a common interface:
//!
//! - **Auth interface**: the [`AuthType`] descriptor and [`AuthContext`]
//!   operation set shared by every algorithm in the family
//! - **HMAC-SHA1**: keyed-hash authentication with precomputed pad state and
//!   an incremental update protocol
//! - **Null**: the no-op member of the family, producing empty tags
//! - **Registry**: identifier-based selection of a static descriptor, plus a
//!   known-answer self-test protocol run against embedded vectors
//!
//! Callers select an algorithm through the registry by [`AuthTypeId`] and
//! drive the returned context through allocate → initialize → start →
//! update* → compute. Contexts own their secret-derived state exclusively
//! and zeroize it on drop.
//!
//! # Platform Support
//!
//! The underlying SHA-1 engine is backed by OpenSSL on Linux. Other targets
//! are not currently supported.

mod auth;
mod hash;
mod hmac;
mod null;

pub use auth::*;
pub use hash::*;
pub use hmac::*;
pub use null::*;
use thiserror::Error;

/// Error type for all authentication operations.
///
/// Every operation reports synchronously to its immediate caller; there is
/// no internal retry and no partially-applied state behind any error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// A key length or requested tag length exceeds the algorithm's native
    /// digest size. Checked before any state is mutated.
    #[error("bad parameter")]
    BadParam,
    /// Context memory could not be acquired. No context is returned and
    /// there is nothing to clean up.
    #[error("allocation failed")]
    AllocFail,
    /// The hash engine could not be constructed or its state could not be
    /// duplicated, or an operation was invoked on a context whose running
    /// state does not exist. The saved init state remains valid; the caller
    /// may retry after a successful start.
    #[error("authentication operation failed")]
    AuthFail,
}
