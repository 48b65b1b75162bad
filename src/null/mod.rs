// Copyright (C) Microsoft Corporation. All rights reserved.

//! Null authentication.
//!
//! The no-op member of the algorithm family: every operation succeeds and
//! the computed tag is empty. Used by transports that negotiate
//! unauthenticated streams while keeping the same algorithm interface.

use super::*;

/// Static descriptor for null authentication, registered as
/// [`AuthTypeId::Null`].
pub static NULL_AUTH: NullAuth = NullAuth;

/// Null authentication algorithm descriptor.
pub struct NullAuth;

impl AuthType for NullAuth {
    fn id(&self) -> AuthTypeId {
        AuthTypeId::Null
    }

    fn description(&self) -> &'static str {
        "null authentication function"
    }

    fn test_data(&self) -> &'static [AuthTestVector] {
        // A single empty vector exercises the full lifecycle.
        static VECTORS: &[AuthTestVector] = &[AuthTestVector {
            key: &[],
            data: &[],
            tag: &[],
        }];
        VECTORS
    }

    fn alloc(&self, key_len: usize, tag_len: usize) -> Result<Box<dyn AuthContext>, AuthError> {
        if tag_len != 0 {
            return Err(AuthError::BadParam);
        }
        Ok(Box::new(NullAuthContext { key_len }))
    }
}

/// Null authentication context; holds no secret state.
pub struct NullAuthContext {
    key_len: usize,
}

impl AuthContext for NullAuthContext {
    fn init(&mut self, key: &[u8]) -> Result<(), AuthError> {
        self.key_len = key.len();
        Ok(())
    }

    fn start(&mut self) -> Result<(), AuthError> {
        Ok(())
    }

    fn update(&mut self, _message: &[u8]) -> Result<(), AuthError> {
        Ok(())
    }

    fn compute(&mut self, _message: &[u8], tag: &mut [u8]) -> Result<(), AuthError> {
        if !tag.is_empty() {
            return Err(AuthError::BadParam);
        }
        Ok(())
    }

    fn key_len(&self) -> usize {
        self.key_len
    }

    fn tag_len(&self) -> usize {
        0
    }
}
