// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::constants::{P_INIT, S_INIT};
use crate::error::Error;

const ROUNDS: usize = 16;
const MIN_KEY_LEN: usize = 1;
const MAX_KEY_LEN: usize = 56;

/// A Blowfish cipher state: the 18-word P-array and the four 256-word
/// S-boxes, after key expansion.
///
/// This is the lower layer bcrypt drives through its "expensive key
/// schedule" (see [`Self::eks_setup`]); it also stands on its own as a
/// conventional 64-bit-block Blowfish cipher via [`Self::new`].
#[derive(Clone)]
pub struct BlowfishState {
    p: [u32; 18],
    s: [[u32; 256]; 4],
}

impl Default for BlowfishState {
    fn default() -> Self {
        Self {
            p: P_INIT,
            s: S_INIT,
        }
    }
}

impl BlowfishState {
    /// Builds a cipher state from a conventional Blowfish key (standard key
    /// schedule, no salt). `key` may be 1 to 56 bytes; shorter keys are
    /// cycled, matching the textbook Blowfish key schedule. Rejects key
    /// lengths outside that range with [`Error::InvalidKeyLength`].
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        if key.len() < MIN_KEY_LEN || key.len() > MAX_KEY_LEN {
            return Err(Error::InvalidKeyLength);
        }
        let mut state = Self::default();
        state.mix_into_pbox(key, 0);
        state.finish_expand();
        Ok(state)
    }

    /// Resets this state to the untouched Blowfish constants, discarding any
    /// prior key expansion.
    pub fn reset(&mut self) {
        self.p = P_INIT;
        self.s = S_INIT;
    }

    /// Re-encrypts the whole P-array and S-box table in place with the
    /// cipher's own current state, chaining each encrypted block into the
    /// next pair of words. This is the second half of both the standard key
    /// schedule and every phase of the expensive one.
    fn finish_expand(&mut self) {
        let mut l = 0u32;
        let mut r = 0u32;
        for i in (0..18).step_by(2) {
            let (el, er) = self.encrypt_pair(l, r);
            self.p[i] = el;
            self.p[i + 1] = er;
            l = el;
            r = er;
        }
        for s in 0..4 {
            for i in (0..256).step_by(2) {
                let (el, er) = self.encrypt_pair(l, r);
                self.s[s][i] = el;
                self.s[s][i + 1] = er;
                l = el;
                r = er;
            }
        }
    }

    /// Mixes `data`, cycled, into the P-array (and only the P-array),
    /// continuing the cyclic index across calls via `offset`. Returns the
    /// advanced offset.
    ///
    /// An empty `data` (a zero-length secret, not a documented precondition
    /// violation -- see [`Self::eks_expand`]) contributes no bytes and is a
    /// no-op rather than a cyclic-index panic; only an empty *salt* is
    /// undefined behavior here.
    fn mix_into_pbox(&mut self, data: &[u8], offset: usize) -> usize {
        if data.is_empty() {
            return offset;
        }
        let mut offset = offset;
        for p in self.p.iter_mut() {
            let mut word = 0u32;
            for _ in 0..4 {
                word = (word << 8) | data[offset % data.len()] as u32;
                offset += 1;
            }
            *p ^= word;
        }
        offset
    }

    /// One call to `EksBlowfishExpand`: mixes `key` into the P-array, then
    /// re-derives the whole P-array and S-box table by encrypting a chain of
    /// blocks seeded from `salt`, cycled, XORed into the running block
    /// before each encryption.
    ///
    /// The salt's cyclic read position resets to the start on every call
    /// (this is what the reference CryptoPP source does, and what this
    /// crate reproduces bit-for-bit -- see DESIGN.md).
    pub fn eks_expand(&mut self, salt: &[u8], key: &[u8]) {
        self.mix_into_pbox(key, 0);

        let mut l = 0u32;
        let mut r = 0u32;
        let mut salt_offset = 0usize;

        let mut next_salt_word = |offset: &mut usize| -> u32 {
            let mut word = 0u32;
            for _ in 0..4 {
                word = (word << 8) | salt[*offset % salt.len()] as u32;
                *offset += 1;
            }
            word
        };

        for i in (0..18).step_by(2) {
            l ^= next_salt_word(&mut salt_offset);
            r ^= next_salt_word(&mut salt_offset);
            let (el, er) = self.encrypt_pair(l, r);
            self.p[i] = el;
            self.p[i + 1] = er;
            l = el;
            r = er;
        }

        // Phase C resets the cyclic salt index to 0, rather than continuing
        // it from Phase B -- this is a historical quirk of the reference
        // implementation this crate stays bug-compatible with (DESIGN.md).
        salt_offset = 0;

        for s in 0..4 {
            for i in (0..256).step_by(2) {
                l ^= next_salt_word(&mut salt_offset);
                r ^= next_salt_word(&mut salt_offset);
                let (el, er) = self.encrypt_pair(l, r);
                self.s[s][i] = el;
                self.s[s][i + 1] = er;
                l = el;
                r = er;
            }
        }
    }

    /// The full bcrypt "expensive key schedule": resets to the untouched
    /// constants, runs one salt-and-key expansion pass, then alternates
    /// `2^cost` rounds of `eks_expand(nul16, key)` / `eks_expand(nul16,
    /// salt)` -- key first, then salt, per iteration, with a 16-byte zero
    /// vector standing in for the salt argument in both (see DESIGN.md).
    ///
    /// `cost` is not range-checked here; callers (the `bcrypt` module)
    /// clamp it to `[MIN_COST, MAX_COST]` first.
    pub fn eks_setup(&mut self, cost: u32, salt: &[u8], key: &[u8]) {
        self.reset();
        self.eks_expand(salt, key);
        const NUL16: [u8; 16] = [0u8; 16];
        for _ in 0..(1u64 << cost) {
            self.eks_expand(&NUL16, key);
            self.eks_expand(&NUL16, salt);
        }
    }

    /// `((S0[a] + S1[b]) XOR S2[c]) + S3[d]`, the four bytes of `x` read
    /// most-significant first. The grouping matters: this is not
    /// `(S0[a] + S1[b]) XOR (S2[c] + S3[d])`.
    #[inline]
    fn f(&self, x: u32) -> u32 {
        let a = (x >> 24) & 0xff;
        let b = (x >> 16) & 0xff;
        let c = (x >> 8) & 0xff;
        let d = x & 0xff;
        (self.s[0][a as usize].wrapping_add(self.s[1][b as usize]) ^ self.s[2][c as usize])
            .wrapping_add(self.s[3][d as usize])
    }

    /// Encrypts one 64-bit block, given as two big-endian 32-bit halves.
    pub fn encrypt_pair(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        left ^= self.p[0];
        for i in 0..ROUNDS / 2 {
            right ^= self.f(left) ^ self.p[2 * i + 1];
            left ^= self.f(right) ^ self.p[2 * i + 2];
        }
        right ^= self.p[ROUNDS + 1];
        (right, left)
    }

    /// Decrypts one 64-bit block, given as two big-endian 32-bit halves.
    /// Walks the same P-array as [`Self::encrypt_pair`] in reverse, rather
    /// than requiring a separately-reversed P-array for decryption (see
    /// DESIGN.md).
    pub fn decrypt_pair(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        left ^= self.p[ROUNDS + 1];
        for i in (0..ROUNDS / 2).rev() {
            right ^= self.f(left) ^ self.p[2 * i + 2];
            left ^= self.f(right) ^ self.p[2 * i + 1];
        }
        right ^= self.p[0];
        (right, left)
    }

    /// Encrypts one 8-byte block in place, in big-endian form.
    pub fn encrypt_block(&self, block: &mut [u8; 8]) {
        let l = u32::from_be_bytes(block[0..4].try_into().unwrap());
        let r = u32::from_be_bytes(block[4..8].try_into().unwrap());
        let (el, er) = self.encrypt_pair(l, r);
        block[0..4].copy_from_slice(&el.to_be_bytes());
        block[4..8].copy_from_slice(&er.to_be_bytes());
    }

    /// Decrypts one 8-byte block in place, in big-endian form.
    pub fn decrypt_block(&self, block: &mut [u8; 8]) {
        let l = u32::from_be_bytes(block[0..4].try_into().unwrap());
        let r = u32::from_be_bytes(block[4..8].try_into().unwrap());
        let (dl, dr) = self.decrypt_pair(l, r);
        block[0..4].copy_from_slice(&dl.to_be_bytes());
        block[4..8].copy_from_slice(&dr.to_be_bytes());
    }
}
