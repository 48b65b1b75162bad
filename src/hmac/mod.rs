// Copyright (C) Microsoft Corporation. All rights reserved.

//! HMAC-SHA1 authentication.
//!
//! Implements the two-pass HMAC construction
//! `HMAC(K, m) = H((K ⊕ opad) ‖ H((K ⊕ ipad) ‖ m))` over the 20-byte SHA-1
//! engine, with the tag truncated only at final output.
//!
//! # Key schedule
//!
//! Initialization XORs the key into the inner and outer pad constants once,
//! absorbs the inner pad, and saves the resulting engine state. Each start
//! duplicates that saved state instead of re-keying, so the pad computation
//! is amortized across every message authenticated under the same key.
//!
//! # Key length limit
//!
//! Keys and tags are both clamped to the 20-byte native digest size, not the
//! 64-byte block size. This short-key-only behavior is intentional and must
//! not be generalized; longer keys are rejected with `BadParam`.
//!
//! # Secret material
//!
//! The outer pad is key-derived and lives for the context's lifetime; it is
//! held in a zero-on-drop wrapper so teardown scrubs it even on early error
//! returns. The transient inner pad built during initialization is likewise
//! zeroized when it leaves scope.

use zeroize::Zeroize;
use zeroize::ZeroizeOnDrop;
use zeroize::Zeroizing;

use super::*;

/// Inner pad fill byte.
const IPAD_BYTE: u8 = 0x36;

/// Outer pad fill byte.
const OPAD_BYTE: u8 = 0x5c;

/// Static descriptor for HMAC-SHA1, registered as [`AuthTypeId::HmacSha1`].
pub static HMAC_SHA1: HmacSha1 = HmacSha1;

/// HMAC-SHA1 algorithm descriptor.
pub struct HmacSha1;

impl AuthType for HmacSha1 {
    fn id(&self) -> AuthTypeId {
        AuthTypeId::HmacSha1
    }

    fn description(&self) -> &'static str {
        "hmac sha-1 authentication function"
    }

    fn test_data(&self) -> &'static [AuthTestVector] {
        SELF_TEST_VECTORS
    }

    fn alloc(&self, key_len: usize, tag_len: usize) -> Result<Box<dyn AuthContext>, AuthError> {
        tracing::trace!(key_len, tag_len, "allocating hmac sha-1 auth context");

        // Keys larger than the digest size are not supported.
        if key_len > SHA1_DIGEST_LEN {
            return Err(AuthError::BadParam);
        }
        if tag_len > SHA1_DIGEST_LEN {
            return Err(AuthError::BadParam);
        }

        Ok(Box::new(HmacSha1Context {
            key_len,
            tag_len,
            opad: OuterPad([0u8; SHA1_BLOCK_LEN]),
            init_ctx: None,
            ctx: None,
        }))
    }
}

/// Outer pad block, scrubbed when dropped or replaced.
#[derive(Zeroize, ZeroizeOnDrop)]
struct OuterPad([u8; SHA1_BLOCK_LEN]);

/// HMAC-SHA1 authentication context.
///
/// Owned exclusively by its creator; not safe for concurrent use. The
/// running inner state (`ctx`) reflects exactly the bytes fed since the most
/// recent start, and the saved keyed state (`init_ctx`) is never mutated
/// after initialization.
pub struct HmacSha1Context {
    /// Bytes actually keyed, at most [`SHA1_DIGEST_LEN`].
    key_len: usize,
    /// Requested tag truncation, at most [`SHA1_DIGEST_LEN`].
    tag_len: usize,
    /// Key XOR 0x5c, 0x5c-padded to the block size. Constant after init.
    opad: OuterPad,
    /// Engine state saved immediately after absorbing the inner pad.
    init_ctx: Option<Sha1>,
    /// Running inner hash state, valid only after a successful start.
    ctx: Option<Sha1>,
}

impl AuthContext for HmacSha1Context {
    fn init(&mut self, key: &[u8]) -> Result<(), AuthError> {
        // Re-checked here because contexts may be re-keyed after allocation.
        if key.len() > SHA1_DIGEST_LEN {
            return Err(AuthError::BadParam);
        }

        let mut ipad = Zeroizing::new([IPAD_BYTE; SHA1_BLOCK_LEN]);
        let mut opad = OuterPad([OPAD_BYTE; SHA1_BLOCK_LEN]);
        for (i, &byte) in key.iter().enumerate() {
            ipad[i] = byte ^ IPAD_BYTE;
            opad.0[i] = byte ^ OPAD_BYTE;
        }

        tracing::trace!(ipad = %hex::encode(&ipad[..]), "keyed inner pad");

        let mut engine = Sha1::new()?;
        engine.update(&ipad[..])?;

        // Commit only once the keyed engine state exists; replacing the old
        // pad zeroizes it.
        self.key_len = key.len();
        self.opad = opad;
        self.init_ctx = Some(engine);
        self.start()
    }

    fn start(&mut self) -> Result<(), AuthError> {
        let init_ctx = self.init_ctx.as_ref().ok_or(AuthError::AuthFail)?;

        // Release any live running state before duplicating.
        self.ctx = None;
        self.ctx = Some(init_ctx.clone());
        Ok(())
    }

    fn update(&mut self, message: &[u8]) -> Result<(), AuthError> {
        tracing::trace!(input = %hex::encode(message), "hmac input");

        self.ctx
            .as_mut()
            .ok_or(AuthError::AuthFail)?
            .update(message)
    }

    fn compute(&mut self, message: &[u8], tag: &mut [u8]) -> Result<(), AuthError> {
        if tag.len() > SHA1_DIGEST_LEN {
            return Err(AuthError::BadParam);
        }

        let mut engine = self.ctx.take().ok_or(AuthError::AuthFail)?;

        // Inner pass: (K ^ ipad) was absorbed at start; finish the message.
        engine.update(message)?;
        let inner = engine.finish()?;

        tracing::trace!(inner = %hex::encode(inner), "intermediate digest");

        // Outer pass over the same engine, reset to a fresh state.
        engine.reset()?;
        engine.update(&self.opad.0)?;
        engine.update(&inner)?;
        let outer = engine.finish()?;

        tag.copy_from_slice(&outer[..tag.len()]);

        tracing::trace!(output = %hex::encode(&*tag), "computed tag");
        Ok(())
    }

    fn key_len(&self) -> usize {
        self.key_len
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }
}

impl Drop for HmacSha1Context {
    fn drop(&mut self) {
        // The pad block scrubs itself; clear the remaining header fields so
        // no byte of the context survives teardown. Engine states are torn
        // down by their own destructors.
        self.key_len.zeroize();
        self.tag_len.zeroize();
    }
}

/// RFC 2202 known-answer chain (cases with keys within the 20-byte limit),
/// including one truncated-output case.
static SELF_TEST_VECTORS: &[AuthTestVector] = &[
    AuthTestVector {
        key: &[0x0b; 20],
        data: b"Hi There",
        tag: &[
            0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64, 0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37,
            0x8c, 0x8e, 0xf1, 0x46, 0xbe, 0x00,
        ],
    },
    AuthTestVector {
        key: b"Jefe",
        data: b"what do ya want for nothing?",
        tag: &[
            0xef, 0xfc, 0xdf, 0x6a, 0xe5, 0xeb, 0x2f, 0xa2, 0xd2, 0x74, 0x16, 0xd5, 0xf1, 0x84,
            0xdf, 0x9c, 0x25, 0x9a, 0x7c, 0x79,
        ],
    },
    AuthTestVector {
        key: &[0xaa; 20],
        data: &[0xdd; 50],
        tag: &[
            0x12, 0x5d, 0x73, 0x42, 0xb9, 0xac, 0x11, 0xcd, 0x91, 0xa3, 0x9a, 0xf4, 0x8a, 0xa1,
            0x7b, 0x4f, 0x63, 0xf1, 0x75, 0xd3,
        ],
    },
    AuthTestVector {
        key: &[0x0c; 20],
        data: b"Test With Truncation",
        tag: &[
            0x4c, 0x1a, 0x03, 0x42, 0x4b, 0x55, 0xe0, 0x7f, 0xe7, 0xf2, 0x7b, 0xe1, 0xd5, 0x8b,
            0xb9, 0x32, 0x4a, 0x9a, 0x5a, 0x04,
        ],
    },
    // Same key and message, 96-bit truncated output.
    AuthTestVector {
        key: &[0x0c; 20],
        data: b"Test With Truncation",
        tag: &[
            0x4c, 0x1a, 0x03, 0x42, 0x4b, 0x55, 0xe0, 0x7f, 0xe7, 0xf2, 0x7b, 0xe1,
        ],
    },
];

#[cfg(test)]
mod tests;
