// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! The offline dictionary attack against a captured transcript.
//!
//! The attacker spent one live guess `p0` impersonating the initiator, so it
//! knows its own `ya`. If the generator were `H(p) * G` for a scalar `H(p)`
//! anyone can compute, then for every candidate `pi`
//!
//! ```text
//! ya_i = H(pi)^-1 * H(p0) * ya
//! [ya_i] Yb = [ya_i * yb * H(p)] G
//! ```
//!
//! equals `[ya * yb * H(p0)] G = [yb] Ya` exactly when `pi = p`. Saving `Yb` and
//! the sealed payload is then enough to test any number of guesses. A
//! hash-to-group generator has no such scalar, and the rescaled key is wrong
//! for every guess but the live one.

use core::fmt;

use crate::aead;
use crate::errors::MapToCurveError;
use crate::group::Group;
use crate::kdf::SessionKey;
use crate::mapping::scalar_from_password;
use crate::pake::Initiator;
use crate::transcript::Transcript;
use crate::Result;

/// What testing a single guess yielded
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The candidate key failed to open the payload
    Rejected,
    /// The candidate key opened the payload
    Recovered(Vec<u8>),
}

/// A guess that opened the sealed payload, and what it opened
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    /// The successful guess
    pub guess: Vec<u8>,
    /// The recovered payload
    pub plaintext: Vec<u8>,
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recovered plaintext: {:?}",
            String::from_utf8_lossy(&self.plaintext)
        )
    }
}

impl From<Recovery> for MapToCurveError {
    fn from(recovery: Recovery) -> Self {
        MapToCurveError::PasswordRecovered {
            guess: String::from_utf8_lossy(&recovery.guess).into_owned(),
            plaintext: String::from_utf8_lossy(&recovery.plaintext).into_owned(),
        }
    }
}

/// Tests password guesses against a transcript using only the public messages
/// and the impersonator's own live-round state.
pub struct DictionaryAttacker<G: Group> {
    ya: G::Scalar,
    live_guess: Vec<u8>,
    live_scalar: G::Scalar,
}

impl<G: Group> DictionaryAttacker<G> {
    /// Sets up the attack from the state the impersonator kept
    pub fn new(impersonator: &Initiator<G>) -> Result<Self> {
        Ok(Self {
            ya: *impersonator.scalar(),
            live_guess: impersonator.password().to_vec(),
            live_scalar: scalar_from_password::<G>(impersonator.password())?,
        })
    }

    /// The guess spent during impersonation
    pub fn live_guess(&self) -> &[u8] {
        &self.live_guess
    }

    /// `H(guess)^-1 * H(live_guess) * ya`
    pub fn correction(&self, guess: &[u8]) -> Result<G::Scalar> {
        let guess_scalar = scalar_from_password::<G>(guess)?;
        let rescale = G::multiply(&G::invert(&guess_scalar)?, &self.live_scalar);
        Ok(G::multiply(&rescale, &self.ya))
    }

    /// The session key the responder would hold if `guess` were its password
    /// and the generator were linear in the password scalar
    pub fn candidate_key(&self, transcript: &Transcript<G>, guess: &[u8]) -> Result<SessionKey> {
        let correction = self.correction(guess)?;
        let k = G::scalar_mul(&correction, transcript.respond_message().element());
        SessionKey::from_shared_element::<G>(&k)
    }

    /// Uses the sealed payload as an oracle for one guess
    pub fn try_guess(&self, transcript: &Transcript<G>, guess: &[u8]) -> Result<GuessOutcome> {
        let key = self.candidate_key(transcript, guess)?;
        match aead::open(&key, transcript.sealed_payload()) {
            Ok(plaintext) => Ok(GuessOutcome::Recovered(plaintext)),
            Err(MapToCurveError::AuthenticationFailure) => Ok(GuessOutcome::Rejected),
            Err(e) => Err(e),
        }
    }

    /// Tries `guesses` in order and returns the first that opens the payload
    pub fn run<I, P>(&self, transcript: &Transcript<G>, guesses: I) -> Result<Option<Recovery>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        for guess in guesses {
            let guess = guess.as_ref();
            match self.try_guess(transcript, guess)? {
                GuessOutcome::Rejected => {
                    tracing::trace!(guess = %String::from_utf8_lossy(guess), "guess rejected");
                }
                GuessOutcome::Recovered(plaintext) => {
                    tracing::debug!(guess = %String::from_utf8_lossy(guess), "payload recovered");
                    return Ok(Some(Recovery {
                        guess: guess.to_vec(),
                        plaintext,
                    }));
                }
            }
        }
        Ok(None)
    }
}
