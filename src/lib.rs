// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! A demonstration of why CPace must map the password to its generator with a
//! hash-to-group function
//!
//! ⚠️ **Warning**: This crate exists to break a deliberately weakened exchange.
//! Do not use it to protect anything.
//!
//! # Overview
//!
//! In CPace both parties derive a generator from the shared password and
//! exchange `Ya = ya * g` and `Yb = yb * g`. If `g` comes from hashing the
//! password to uniform bytes and mapping those bytes into the group
//! ([`MappingStrategy::HashToGroup`]), an active attacker who impersonates the
//! initiator learns whether its one guess was right, and nothing more.
//!
//! If instead `g` is computed as `H(password) * B` for a fixed generator `B`
//! ([`MappingStrategy::HashToScalarThenMultiply`]), the attacker can rescale
//! its own ephemeral scalar for any other guess and recompute the responder's
//! session key. One impersonation then becomes an unlimited offline
//! dictionary attack.
//!
//! # Running a scenario
//!
//! A [`Scenario`] builds one round where the first guess is spent on the
//! impersonation, captures the responder's message and a payload sealed under
//! its session key, and replays every other guess offline:
//!
//! ```
//! use cpace_map_to_curve::rand_core::OsRng;
//! use cpace_map_to_curve::{MappingStrategy, Ristretto255, Scenario, Verdict};
//!
//! let scenario = Scenario::default();
//!
//! let verdict = scenario.run::<Ristretto255, _>(MappingStrategy::HashToGroup, &mut OsRng)?;
//! assert_eq!(verdict, Verdict::Pass);
//!
//! let verdict =
//!     scenario.run::<Ristretto255, _>(MappingStrategy::HashToScalarThenMultiply, &mut OsRng)?;
//! match verdict {
//!     Verdict::Fail(recovery) => assert_eq!(recovery.plaintext, b"hello, world!"),
//!     Verdict::Pass => unreachable!("the offline guess should recover the payload"),
//! }
//! # Ok::<(), cpace_map_to_curve::MapToCurveError>(())
//! ```
//!
//! # Running the pieces by hand
//!
//! The round and the attack are also available separately:
//!
//! ```
//! use cpace_map_to_curve::rand_core::OsRng;
//! use cpace_map_to_curve::{transcript, DictionaryAttacker, MappingStrategy, Ristretto255};
//!
//! let round = transcript::generate::<Ristretto255, _>(
//!     MappingStrategy::HashToScalarThenMultiply,
//!     b"hunter2",
//!     b"password",
//!     b"attack at dawn",
//!     &mut OsRng,
//! )?;
//!
//! let attacker = DictionaryAttacker::new(&round.impersonator)?;
//! let recovery = attacker
//!     .run(&round.transcript, ["123456", "qwerty", "hunter2"])?
//!     .expect("hunter2 is in the dictionary");
//! assert_eq!(recovery.guess, b"hunter2");
//! # Ok::<(), cpace_map_to_curve::MapToCurveError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::doc_markdown, missing_docs, rustdoc::all)]

pub mod aead;
pub mod attack;
mod errors;
pub mod group;
pub mod kdf;
pub mod mapping;
pub mod pake;
pub mod scenario;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use attack::{DictionaryAttacker, GuessOutcome, Recovery};
pub use errors::MapToCurveError;
pub use group::{Group, Ristretto255};
pub use kdf::SessionKey;
pub use mapping::MappingStrategy;
pub use pake::{InitMessage, Initiator, RespondMessage};
pub use rand_core;
pub use scenario::{Scenario, Verdict};
pub use transcript::{Round, Transcript};

type Result<T> = core::result::Result<T, MapToCurveError>;
