// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! Password-to-element mappings

use core::fmt;

use crate::group::{Group, UNIFORM_BYTES_LEN};
use crate::kdf::derive_array;
use crate::Result;

/// How a password becomes the generator of an exchange round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingStrategy {
    /// Derive uniform bytes from the password and map them directly into the
    /// group. The result has no discrete log an attacker can compute.
    HashToGroup,
    /// Derive a scalar from the password and multiply the fixed generator by
    /// it. The result is linear in a scalar anyone can compute from a guess.
    HashToScalarThenMultiply,
}

impl MappingStrategy {
    /// Both strategies, secure first
    pub const ALL: [MappingStrategy; 2] = [
        MappingStrategy::HashToGroup,
        MappingStrategy::HashToScalarThenMultiply,
    ];

    /// Maps `password` to a group element
    pub fn map_password<G: Group>(&self, password: &[u8]) -> Result<G::Element> {
        match self {
            MappingStrategy::HashToGroup => {
                let uniform = derive_array::<UNIFORM_BYTES_LEN>(password)?;
                Ok(G::element_from_uniform_bytes(&uniform))
            }
            MappingStrategy::HashToScalarThenMultiply => {
                let scalar = scalar_from_password::<G>(password)?;
                Ok(G::scalar_base_mul(&scalar))
            }
        }
    }

    /// Label printed by the scenario driver
    pub fn description(&self) -> &'static str {
        match self {
            MappingStrategy::HashToGroup => "with map_to_curve",
            MappingStrategy::HashToScalarThenMultiply => "without map_to_curve",
        }
    }
}

impl fmt::Display for MappingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingStrategy::HashToGroup => f.write_str("hash-to-group"),
            MappingStrategy::HashToScalarThenMultiply => f.write_str("hash-to-scalar"),
        }
    }
}

/// Derives the scalar the insecure mapping multiplies the generator by
pub fn scalar_from_password<G: Group>(password: &[u8]) -> Result<G::Scalar> {
    let uniform = derive_array::<UNIFORM_BYTES_LEN>(password)?;
    G::sample_scalar(&uniform)
}
