// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! A bcrypt / EksBlowfish password-hashing and key-derivation core.
//!
//! This crate is a raw KDF primitive: given a secret, a 16-byte salt, and a
//! cost, [`bcrypt::derive`] produces up to 24 bytes of derived key material
//! and reports the EksBlowfish iteration count it used. It does not encode
//! or parse `$2a$...`-style password hash strings; that's layered on top by
//! a caller that owns salt and cost storage.

#[doc(hidden)]
pub const EKSBLOWFISH_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Implementation of the Blowfish block cipher and its bcrypt-specific
/// expensive key schedule.
pub mod blowfish;

/// bcrypt key derivation built on top of [`blowfish`].
pub mod bcrypt;

/// The narrow `BcryptParams`/`RandomSource` collaborator traits a caller
/// can implement instead of passing cost/salt/truncation-bug positionally.
pub mod params;

// NOTE: Should be brought up to top-level because it's a basic error type.
mod error;
pub use error::Error;
