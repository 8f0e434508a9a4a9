// SPDX-FileCopyrightText: 2026 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use eksblowfish::bcrypt;

const SALT: &[u8; 16] = b"0123456789abcdef";

fn bench_derive_at_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("bcrypt derive");
    for cost in [bcrypt::MIN_COST, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(cost), &cost, |b, &cost| {
            let mut out = [0u8; bcrypt::MAX_DERIVED_LEN];
            b.iter(|| bcrypt::derive(&mut out, b"hunter2", SALT, cost, false).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derive_at_cost);
criterion_main!(benches);
