// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! bcrypt: a cost-parameterized password key-derivation function built on
//! top of [`crate::blowfish::BlowfishState`]'s expensive key schedule.
//!
//! This reproduces the behavior of the CryptoPP `Bcrypt` class this crate
//! was grounded on, including its documented divergence from canonical
//! OpenBSD/`$2a`/`$2b` bcrypt (see DESIGN.md). It is a raw key-derivation
//! primitive, not a password-hash string codec: callers own salt storage,
//! cost storage, and any `$2a$...` style encoding.

use tracing::trace;
use zeroize::Zeroize;

use crate::blowfish::BlowfishState;
use crate::error::Error;
use crate::params::{BcryptParams, RandomSource};

/// Smallest accepted cost (log2 of the EksBlowfish iteration count).
pub const MIN_COST: u32 = 4;
/// The cost used when a caller doesn't specify one.
pub const DEFAULT_COST: u32 = 10;
/// Largest accepted cost. `2^31` EksBlowfish expansions is already well
/// beyond any practical wait, so this is mostly a guard against overflow.
pub const MAX_COST: u32 = 31;

/// Required length, in bytes, of the salt.
pub const SALT_SIZE: usize = 16;

/// Secrets longer than this are truncated before key derivation.
pub const MAX_SECRET_LEN: usize = 72;

/// Largest derived key length this KDF can produce in one call (the magic
/// constant is encrypted in 3 blocks of 8 bytes, 64 times each).
pub const MAX_DERIVED_LEN: usize = 24;

/// "OrpheanBeholderScryDoubt", the fixed plaintext bcrypt repeatedly
/// encrypts to produce its output.
pub const MAGIC: [u8; 24] = *b"OrpheanBeholderScryDoubt";

/// The name of this key-derivation algorithm, for callers that tag derived
/// credentials with the algorithm that produced them.
pub const ALGORITHM_NAME: &str = "bcrypt";

/// Clamps a requested derived-key length down to what this KDF can
/// actually produce, the same way `GetValidDerivedLength` does in the
/// reference implementation.
pub fn valid_derived_length(requested: usize) -> usize {
    requested.min(MAX_DERIVED_LEN)
}

/// Derives `out.len()` bytes (1 to [`MAX_DERIVED_LEN`]) from `secret` and
/// `salt` at the given `cost`, and returns the EksBlowfish iteration count
/// used (`1 << cost`).
///
/// `cost` is clamped to `[MIN_COST, MAX_COST]`. `secret` longer than
/// [`MAX_SECRET_LEN`] bytes is truncated; if `trunc_bug` is set, the
/// historical `secret.len() & 0xff` bitmask is applied first, reproducing
/// a well-known implementation bug instead of fixing it (see DESIGN.md).
///
/// `salt` should be [`SALT_SIZE`] bytes, but this is a recommendation the
/// core doesn't enforce, not a checked precondition; it must not be empty,
/// or the expensive key schedule's cyclic indexing panics (see DESIGN.md).
pub fn derive(
    out: &mut [u8],
    secret: &[u8],
    salt: &[u8],
    cost: u32,
    trunc_bug: bool,
) -> Result<u64, Error> {
    if out.is_empty() || out.len() > MAX_DERIVED_LEN {
        return Err(Error::InvalidDerivedLength {
            requested: out.len(),
        });
    }

    let cost = clamp_cost(cost);

    let mut secret_len = secret.len();
    if trunc_bug {
        let truncated = secret_len & 0xff;
        if truncated != secret_len {
            trace!(from = secret_len, to = truncated, "applying truncation bug");
        }
        secret_len = truncated;
    }
    if secret_len > MAX_SECRET_LEN {
        trace!(from = secret_len, to = MAX_SECRET_LEN, "clamping secret length");
        secret_len = MAX_SECRET_LEN;
    }

    let mut secret_copy = secret[..secret_len].to_vec();

    let mut state = BlowfishState::default();
    state.eks_setup(cost, salt, &secret_copy);

    secret_copy.zeroize();

    let mut ctext = [0u32; 6];
    for (word, chunk) in ctext.iter_mut().zip(MAGIC.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    for pair in ctext.chunks_exact_mut(2) {
        for _ in 0..64 {
            let (l, r) = state.encrypt_pair(pair[0], pair[1]);
            pair[0] = l;
            pair[1] = r;
        }
    }

    let mut derived = [0u8; MAX_DERIVED_LEN];
    for (word, chunk) in ctext.iter().zip(derived.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out.copy_from_slice(&derived[..out.len()]);
    derived.zeroize();
    ctext.zeroize();

    Ok(1u64 << cost)
}

/// The same derivation as [`derive`], taking its cost/salt/truncation-bug
/// switch from a [`BcryptParams`] collaborator instead of positional
/// arguments.
pub fn derive_with_params(
    out: &mut [u8],
    secret: &[u8],
    params: &impl BcryptParams,
) -> Result<u64, Error> {
    derive(
        out,
        secret,
        params.salt(),
        params.cost(),
        params.truncation_bug(),
    )
}

fn clamp_cost(cost: u32) -> u32 {
    let clamped = cost.clamp(MIN_COST, MAX_COST);
    if clamped != cost {
        trace!(from = cost, to = clamped, "clamping cost");
    }
    clamped
}

/// Fills `out` (must be [`SALT_SIZE`] bytes) with fresh random salt bytes
/// from `rng`.
pub fn generate_salt(rng: &mut impl RandomSource, out: &mut [u8]) {
    assert_eq!(out.len(), SALT_SIZE, "salt buffer must be SALT_SIZE bytes");
    rng.fill(out);
}

/// Fills `out` (must be [`SALT_SIZE`] bytes) with fresh random salt bytes
/// from the OS CSPRNG. Available with the `os-rng` feature.
#[cfg(feature = "os-rng")]
pub fn generate_salt_os(out: &mut [u8]) -> Result<(), getrandom::Error> {
    assert_eq!(out.len(), SALT_SIZE, "salt buffer must be SALT_SIZE bytes");
    getrandom::getrandom(out)
}
