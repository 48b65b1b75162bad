// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-based SHA-1 engine for Linux systems.
//!
//! Wraps `openssl::hash::Hasher` configured for SHA-1 behind the
//! [`HashEngine`] interface. OpenSSL's digest contexts support
//! `EVP_MD_CTX_copy`, which the `Clone` implementation of `Hasher` uses to
//! duplicate a mid-stream state.

use openssl::hash::Hasher;
use openssl::hash::MessageDigest;

use super::*;

/// OpenSSL-backed SHA-1 engine.
#[derive(Clone)]
pub struct OsslSha1 {
    hasher: Hasher,
}

impl HashEngine for OsslSha1 {
    fn new() -> Result<Self, AuthError> {
        let hasher = Hasher::new(MessageDigest::sha1()).map_err(|_| AuthError::AuthFail)?;
        Ok(Self { hasher })
    }

    fn reset(&mut self) -> Result<(), AuthError> {
        self.hasher = Hasher::new(MessageDigest::sha1()).map_err(|_| AuthError::AuthFail)?;
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<(), AuthError> {
        self.hasher.update(data).map_err(|_| AuthError::AuthFail)
    }

    fn finish(&mut self) -> Result<[u8; SHA1_DIGEST_LEN], AuthError> {
        let digest = self.hasher.finish().map_err(|_| AuthError::AuthFail)?;
        let mut out = [0u8; SHA1_DIGEST_LEN];
        out.copy_from_slice(&digest);
        Ok(out)
    }
}
