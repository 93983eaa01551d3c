// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! Key derivation: HKDF-SHA256 with an empty salt and empty info

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::MapToCurveError;
use crate::group::Group;
use crate::Result;

/// Length of a [`SessionKey`]
pub const SESSION_KEY_LEN: usize = 32;

/// Stretches `seed` into `len` uniform bytes
pub fn derive(seed: &[u8], len: usize) -> Result<Vec<u8>> {
    let mut okm = vec![0u8; len];
    Hkdf::<Sha256>::new(None, seed)
        .expand(&[], &mut okm)
        .map_err(|_| MapToCurveError::InvalidLength(len))?;
    Ok(okm)
}

/// Stretches `seed` into a fixed-size array
pub fn derive_array<const N: usize>(seed: &[u8]) -> Result<[u8; N]> {
    let mut okm = [0u8; N];
    Hkdf::<Sha256>::new(None, seed)
        .expand(&[], &mut okm)
        .map_err(|_| MapToCurveError::InvalidLength(N))?;
    Ok(okm)
}

/// The intermediate session key both parties derive from the shared element,
/// used directly as an authenticated-encryption key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey([u8; SESSION_KEY_LEN]);

impl SessionKey {
    /// Derives the session key from the shared element `k`
    pub fn from_shared_element<G: Group>(k: &G::Element) -> Result<Self> {
        derive_array::<SESSION_KEY_LEN>(&G::encode(k)).map(Self)
    }

    /// The raw key bytes
    pub fn as_bytes(&self) -> &[u8; SESSION_KEY_LEN] {
        &self.0
    }
}

impl core::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SessionKey(..)")
    }
}
