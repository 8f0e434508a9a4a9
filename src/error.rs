// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested derived key length is zero or exceeds `MAX_DERIVED_LEN`.
    InvalidDerivedLength {
        /// The length that was requested.
        requested: usize,
    },
    /// A Blowfish key passed to [`crate::blowfish::BlowfishState::new`] was
    /// outside the cipher's supported 1..=56 byte range.
    InvalidKeyLength,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidDerivedLength { requested } => {
                write!(f, "requested derived key length {requested} is invalid")
            }
            Error::InvalidKeyLength => write!(f, "blowfish key must be 1 to 56 bytes"),
        }
    }
}
