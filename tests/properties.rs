// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use eksblowfish::bcrypt::{self, MAX_COST, MAX_DERIVED_LEN, MIN_COST, SALT_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn derive_is_deterministic(secret in ".{0,80}", salt in prop::array::uniform16(any::<u8>()), cost in MIN_COST..=6u32) {
        let mut a = [0u8; MAX_DERIVED_LEN];
        let mut b = [0u8; MAX_DERIVED_LEN];
        bcrypt::derive(&mut a, secret.as_bytes(), &salt, cost, false).unwrap();
        bcrypt::derive(&mut b, secret.as_bytes(), &salt, cost, false).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn derive_reports_iteration_count(cost in 0..8u32) {
        // Capped well below MAX_COST: 2^cost EksBlowfish expansions run
        // for real here, and MAX_COST's 2^31 is impractical to exercise
        // in a property test (see DESIGN.md).
        let mut out = [0u8; MAX_DERIVED_LEN];
        let salt = [0u8; SALT_SIZE];
        let rounds = bcrypt::derive(&mut out, b"a secret", &salt, cost, false).unwrap();
        let clamped = cost.clamp(MIN_COST, MAX_COST);
        prop_assert_eq!(rounds, 1u64 << clamped);
    }

    #[test]
    fn different_salts_almost_never_collide(
        salt_a in prop::array::uniform16(any::<u8>()),
        salt_b in prop::array::uniform16(any::<u8>()),
    ) {
        prop_assume!(salt_a != salt_b);
        let mut a = [0u8; MAX_DERIVED_LEN];
        let mut b = [0u8; MAX_DERIVED_LEN];
        bcrypt::derive(&mut a, b"a shared secret", &salt_a, MIN_COST, false).unwrap();
        bcrypt::derive(&mut b, b"a shared secret", &salt_b, MIN_COST, false).unwrap();
        prop_assert_ne!(a, b);
    }

    #[test]
    fn valid_derived_length_is_never_larger_than_max(requested in 0usize..10_000) {
        prop_assert!(bcrypt::valid_derived_length(requested) <= MAX_DERIVED_LEN);
    }

    #[test]
    fn truncation_bug_is_a_pure_function_of_secret_length(
        len in 0usize..400,
        salt in prop::array::uniform16(any::<u8>()),
    ) {
        let secret = vec![b'x'; len];
        let mut a = [0u8; MAX_DERIVED_LEN];
        let mut b = [0u8; MAX_DERIVED_LEN];
        bcrypt::derive(&mut a, &secret, &salt, MIN_COST, true).unwrap();
        bcrypt::derive(&mut b, &secret, &salt, MIN_COST, true).unwrap();
        prop_assert_eq!(a, b);
    }
}
