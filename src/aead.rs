// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! Authenticated encryption of the test payload under a session key.
//!
//! A sealed payload is `nonce || ciphertext || tag`.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand_core::{CryptoRng, RngCore};

use crate::errors::MapToCurveError;
use crate::kdf::SessionKey;
use crate::Result;

/// Length of the nonce prepended to a sealed payload
pub const NONCE_LEN: usize = 12;
/// Length of the authentication tag appended by the cipher
pub const TAG_LEN: usize = 16;

/// Encrypts `plaintext` under `key` with a fresh nonce drawn from `rng`
pub fn seal<R: RngCore + CryptoRng>(
    key: &SessionKey,
    plaintext: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| MapToCurveError::Encryption)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Decrypts a sealed payload, failing with
/// [`MapToCurveError::AuthenticationFailure`] under a wrong key or for a
/// tampered or truncated payload.
pub fn open(key: &SessionKey, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(MapToCurveError::AuthenticationFailure);
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| MapToCurveError::AuthenticationFailure)
}
