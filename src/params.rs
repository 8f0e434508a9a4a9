// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::bcrypt::DEFAULT_COST;

/// A source of random bytes, for generating fresh salts.
///
/// This crate doesn't carry an opinion on which random number generator a
/// caller should use; implement this trait over whatever one is already in
/// scope (a `rand::Rng`, an HSM handle, a test fixture). Enable the
/// `os-rng` feature for a ready-made implementation backed by the OS CSPRNG.
pub trait RandomSource {
    /// Fills `buf` with random bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

/// The cost, salt, and truncation-bug switch for a single [`crate::bcrypt::derive_with_params`] call.
///
/// Every method is defaulted so callers only need to override the fields
/// that matter to them; a bare `()` works as "use all the defaults" (though
/// the default empty salt will panic on derive -- see [`Self::salt`]).
pub trait BcryptParams {
    /// The work factor, as a base-2 logarithm of the EksBlowfish iteration
    /// count. Clamped to `[MIN_COST, MAX_COST]` by `derive`.
    fn cost(&self) -> u32 {
        DEFAULT_COST
    }

    /// The salt bytes. Recommended to be [`crate::bcrypt::SALT_SIZE`]
    /// bytes, but not enforced; must not be empty, or `derive` panics on
    /// the expensive key schedule's cyclic indexing. Defaults to empty,
    /// matching the underlying parameter-by-name lookup this trait stands
    /// in for, which likewise has no salt unless one is explicitly set.
    fn salt(&self) -> &[u8] {
        &[]
    }

    /// Whether to reproduce the historical 8-bit secret-length truncation
    /// bug (`secret_len &= 0xff`) before the 72-byte clamp.
    fn truncation_bug(&self) -> bool {
        false
    }
}

impl BcryptParams for () {}

/// A [`RandomSource`] backed by the operating system's CSPRNG, via
/// `getrandom`. Available with the `os-rng` feature.
#[cfg(feature = "os-rng")]
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

#[cfg(feature = "os-rng")]
impl RandomSource for OsRandomSource {
    fn fill(&mut self, buf: &mut [u8]) {
        getrandom::getrandom(buf).expect("OS random number generator failed");
    }
}
