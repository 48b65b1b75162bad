// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

#[test]
fn test_registry_resolves_hmac_sha1() {
    let auth = auth_type(AuthTypeId::HmacSha1).expect("resolve hmac sha-1");
    assert_eq!(auth.id(), AuthTypeId::HmacSha1);
    assert_eq!(auth.description(), "hmac sha-1 authentication function");
    assert!(!auth.test_data().is_empty());
}

#[test]
fn test_registry_resolves_null() {
    let auth = auth_type(AuthTypeId::Null).expect("resolve null auth");
    assert_eq!(auth.id(), AuthTypeId::Null);
    assert_eq!(auth.description(), "null authentication function");
}

#[test]
fn test_registry_lifecycle_through_descriptor() {
    // Drive a full authentication pass without naming a concrete type.
    let auth = auth_type(AuthTypeId::HmacSha1).expect("resolve hmac sha-1");
    let mut context = auth.alloc(20, 20).expect("alloc context");
    context.init(&[0x0b; 20]).expect("init context");
    context.start().expect("start context");
    context.update(b"Hi ").expect("update context");

    let mut tag = [0u8; 20];
    context.compute(b"There", &mut tag).expect("compute tag");
    assert_eq!(
        tag,
        [
            0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64, 0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37,
            0x8c, 0x8e, 0xf1, 0x46, 0xbe, 0x00,
        ]
    );
}

#[test]
fn test_null_auth_produces_empty_tags() {
    let auth = auth_type(AuthTypeId::Null).expect("resolve null auth");
    let mut context = auth.alloc(0, 0).expect("alloc null context");
    context.init(&[]).expect("init null context");
    context.start().expect("start null context");
    context.update(b"ignored").expect("update null context");
    context.compute(b"ignored", &mut []).expect("compute empty tag");
    assert_eq!(context.tag_len(), 0);
}

#[test]
fn test_null_auth_rejects_nonzero_tag_length() {
    let auth = auth_type(AuthTypeId::Null).expect("resolve null auth");
    assert_eq!(auth.alloc(0, 4).err(), Some(AuthError::BadParam));

    let mut context = auth.alloc(0, 0).expect("alloc null context");
    let mut tag = [0u8; 4];
    assert_eq!(
        context.compute(b"", &mut tag).err(),
        Some(AuthError::BadParam)
    );
}
