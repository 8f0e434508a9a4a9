// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The Blowfish block cipher, and the "expensive key schedule" variant
//! (EksBlowfish) that bcrypt builds on top of it.

pub mod constants;

mod state;
pub use state::BlowfishState;
