// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! Runs the attack end-to-end for one mapping strategy

use rand_core::{CryptoRng, RngCore};

use crate::attack::{DictionaryAttacker, Recovery};
use crate::errors::MapToCurveError;
use crate::group::Group;
use crate::mapping::MappingStrategy;
use crate::transcript;
use crate::Result;

const DEFAULT_PASSWORD: &[u8] = b"baz";
const DEFAULT_GUESSES: [&[u8]; 3] = [b"foo", b"bar", b"baz"];
const DEFAULT_PAYLOAD: &[u8] = b"hello, world!";

/// The inputs of one scenario. The first guess is spent live on the
/// impersonation; all of them are then replayed offline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    true_password: Vec<u8>,
    guesses: Vec<Vec<u8>>,
    payload: Vec<u8>,
}

/// How a scenario ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing beyond the live guess opened the payload
    Pass,
    /// An offline guess opened the payload
    Fail(Recovery),
}

impl Verdict {
    /// Converts a failed verdict into [`MapToCurveError::PasswordRecovered`]
    pub fn into_result(self) -> Result<()> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(recovery) => Err(recovery.into()),
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            true_password: DEFAULT_PASSWORD.to_vec(),
            guesses: DEFAULT_GUESSES.iter().map(|g| g.to_vec()).collect(),
            payload: DEFAULT_PAYLOAD.to_vec(),
        }
    }
}

impl Scenario {
    /// Create a new [`Scenario`]; `guesses` must not be empty
    pub fn new<P: AsRef<[u8]>>(true_password: &[u8], guesses: &[P], payload: &[u8]) -> Result<Self> {
        if guesses.is_empty() {
            return Err(MapToCurveError::EmptyGuessList);
        }
        Ok(Self {
            true_password: true_password.to_vec(),
            guesses: guesses.iter().map(|g| g.as_ref().to_vec()).collect(),
            payload: payload.to_vec(),
        })
    }

    /// The guess spent on the impersonation
    pub fn live_guess(&self) -> &[u8] {
        &self.guesses[0]
    }

    /// All guesses, in the order they are tried
    pub fn guesses(&self) -> &[Vec<u8>] {
        &self.guesses
    }

    /// Builds a round with `mapping`, attacks it, and classifies the outcome
    pub fn run<G: Group, R: RngCore + CryptoRng>(
        &self,
        mapping: MappingStrategy,
        rng: &mut R,
    ) -> Result<Verdict> {
        let round = transcript::generate::<G, R>(
            mapping,
            &self.true_password,
            self.live_guess(),
            &self.payload,
            rng,
        )?;

        // Opening the payload with the live guess itself reveals nothing the
        // live attempt did not, so only the other guesses decide the verdict.
        let attacker = DictionaryAttacker::new(&round.impersonator)?;
        let offline = self
            .guesses
            .iter()
            .filter(|guess| guess.as_slice() != attacker.live_guess());
        let verdict = match attacker.run(&round.transcript, offline)? {
            Some(recovery) => Verdict::Fail(recovery),
            None => Verdict::Pass,
        };

        tracing::debug!(
            group = G::NAME,
            %mapping,
            passed = matches!(verdict, Verdict::Pass),
            "scenario finished"
        );
        Ok(verdict)
    }
}
