// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! The prime-order group the exchange runs over

use core::fmt::Debug;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::traits::Identity;
use curve25519_dalek::Scalar;
use rand_core::{CryptoRng, RngCore};

use crate::errors::MapToCurveError;
use crate::Result;

/// Number of uniform bytes consumed by scalar sampling and the hash-to-group map
pub const UNIFORM_BYTES_LEN: usize = 64;

/// A prime-order group exposing the operations the exchange needs.
///
/// Implementors are zero-sized markers; the associated types carry the values.
pub trait Group {
    /// An integer modulo the group order
    type Scalar: Copy + Debug + PartialEq;
    /// A point in the group
    type Element: Copy + Debug + PartialEq;

    /// Name of the group, used in log output
    const NAME: &'static str;

    /// Reduces exactly [`UNIFORM_BYTES_LEN`] bytes to a scalar.
    ///
    /// Fails with [`MapToCurveError::InvalidEncoding`] on any other length or
    /// when the reduction is zero.
    fn sample_scalar(bytes: &[u8]) -> Result<Self::Scalar>;

    /// Maps [`UNIFORM_BYTES_LEN`] uniform bytes directly to a group element
    fn element_from_uniform_bytes(bytes: &[u8; UNIFORM_BYTES_LEN]) -> Self::Element;

    /// Variable-base scalar multiplication
    fn scalar_mul(scalar: &Self::Scalar, element: &Self::Element) -> Self::Element;

    /// Fixed-base scalar multiplication
    fn scalar_base_mul(scalar: &Self::Scalar) -> Self::Element;

    /// Scalar inversion, failing with [`MapToCurveError::NotInvertible`] for zero
    fn invert(scalar: &Self::Scalar) -> Result<Self::Scalar>;

    /// Scalar multiplication
    fn multiply(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Canonical encoding of an element
    fn encode(element: &Self::Element) -> Vec<u8>;

    /// Decodes a canonical element encoding
    fn decode(bytes: &[u8]) -> Result<Self::Element>;

    /// Whether `element` is the group identity
    fn is_identity(element: &Self::Element) -> bool;

    /// Samples a uniformly random nonzero scalar, drawing fresh bytes until
    /// one is accepted.
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Scalar {
        let mut bytes = [0u8; UNIFORM_BYTES_LEN];
        loop {
            rng.fill_bytes(&mut bytes);
            match Self::sample_scalar(&bytes) {
                Ok(scalar) => return scalar,
                Err(_) => tracing::trace!(group = Self::NAME, "resampling scalar"),
            }
        }
    }
}

/// Ristretto255 as implemented by `curve25519-dalek`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ristretto255;

impl Group for Ristretto255 {
    type Scalar = Scalar;
    type Element = RistrettoPoint;

    const NAME: &'static str = "ristretto255";

    fn sample_scalar(bytes: &[u8]) -> Result<Scalar> {
        let wide: &[u8; UNIFORM_BYTES_LEN] = bytes
            .try_into()
            .map_err(|_| MapToCurveError::InvalidEncoding)?;
        let scalar = Scalar::from_bytes_mod_order_wide(wide);
        match scalar == Scalar::ZERO {
            true => Err(MapToCurveError::InvalidEncoding),
            false => Ok(scalar),
        }
    }

    fn element_from_uniform_bytes(bytes: &[u8; UNIFORM_BYTES_LEN]) -> RistrettoPoint {
        RistrettoPoint::from_uniform_bytes(bytes)
    }

    fn scalar_mul(scalar: &Scalar, element: &RistrettoPoint) -> RistrettoPoint {
        element * scalar
    }

    fn scalar_base_mul(scalar: &Scalar) -> RistrettoPoint {
        RistrettoPoint::mul_base(scalar)
    }

    fn invert(scalar: &Scalar) -> Result<Scalar> {
        match scalar == &Scalar::ZERO {
            true => Err(MapToCurveError::NotInvertible),
            false => Ok(scalar.invert()),
        }
    }

    fn multiply(a: &Scalar, b: &Scalar) -> Scalar {
        a * b
    }

    fn encode(element: &RistrettoPoint) -> Vec<u8> {
        element.compress().to_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<RistrettoPoint> {
        CompressedRistretto::from_slice(bytes)
            .ok()
            .and_then(|compressed| compressed.decompress())
            .ok_or(MapToCurveError::InvalidEncoding)
    }

    fn is_identity(element: &RistrettoPoint) -> bool {
        element == &RistrettoPoint::identity()
    }
}
