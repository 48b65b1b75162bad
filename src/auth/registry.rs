// Copyright (C) Microsoft Corporation. All rights reserved.

//! Registry of authentication algorithm descriptors.
//!
//! Maps an [`AuthTypeId`] to the static descriptor implementing it. The
//! registry is the only way callers obtain an algorithm; adding a new
//! member of the family means adding its descriptor here.

use super::*;

/// Every registered algorithm descriptor.
static AUTH_TYPES: &[&dyn AuthType] = &[&NULL_AUTH, &HMAC_SHA1];

/// Resolves an algorithm identifier to its static descriptor.
pub fn auth_type(id: AuthTypeId) -> Option<&'static dyn AuthType> {
    AUTH_TYPES.iter().copied().find(|auth| auth.id() == id)
}

/// Runs the self-test protocol for every registered algorithm.
///
/// Intended to be called once at startup before any algorithm is trusted.
///
/// # Errors
///
/// Propagates the first failure from [`self_test`].
pub fn self_test_all() -> Result<(), AuthError> {
    for auth in AUTH_TYPES {
        self_test(*auth)?;
    }
    Ok(())
}
