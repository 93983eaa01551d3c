// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use thiserror::Error;

/// The library's error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapToCurveError {
    /// Error for when bytes do not canonicalize to a scalar or group element
    #[error("Bytes are not a valid encoding")]
    InvalidEncoding,
    /// Error for when the zero scalar is inverted
    #[error("Scalar is not invertible")]
    NotInvertible,
    /// Error for when a shared element is the identity
    #[error("Shared element is the identity")]
    IdentityElement,
    /// Error for when the key derivation is asked for more output than it can produce
    #[error("Cannot derive {0} bytes")]
    InvalidLength(usize),
    /// Error for when sealing a payload fails
    #[error("Issue with encryption")]
    Encryption,
    /// Error for when opening a sealed payload is rejected
    #[error("Authentication failed")]
    AuthenticationFailure,
    /// The attack recovered a sealed payload with an offline guess
    #[error("recovered plaintext: {plaintext:?}")]
    PasswordRecovered {
        /// The guess that produced the responder's session key
        guess: String,
        /// The recovered payload
        plaintext: String,
    },
    /// Error for when a scenario has no guesses to spend on the live round
    #[error("Guess list is empty")]
    EmptyGuessList,
}
