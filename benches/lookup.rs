/*
  Fiddler, a UCI-compatible chess engine.
  Copyright (C) 2022 The Fiddler Authors (see AUTHORS.md file)

  Fiddler is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Fiddler is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fiddler_magic::{
    init, queen_attacks, rays, rook_attacks, Bitboard, BlackMagic, FancyMagic, MagicTable, Square,
};

/// Occupancy of the middlegame position used by every benchmark.
const OCCUPANCY: Bitboard = Bitboard::new(0x91EF_0410_2824_DC9F);

pub fn bench_rook_lookup(c: &mut Criterion) {
    init();
    c.bench_function("rook attacks, all squares", |b| {
        b.iter(|| {
            Square::ALL
                .iter()
                .fold(Bitboard::EMPTY, |acc, &sq| acc | rook_attacks(black_box(OCCUPANCY), sq))
        })
    });
}

pub fn bench_queen_lookup(c: &mut Criterion) {
    init();
    c.bench_function("queen attacks, all squares", |b| {
        b.iter(|| {
            Square::ALL
                .iter()
                .fold(Bitboard::EMPTY, |acc, &sq| acc | queen_attacks(black_box(OCCUPANCY), sq))
        })
    });
}

pub fn bench_ray_tracing(c: &mut Criterion) {
    c.bench_function("ray-traced queen attacks, all squares", |b| {
        b.iter(|| {
            Square::ALL.iter().fold(Bitboard::EMPTY, |acc, &sq| {
                acc | rays::queen_attacks(black_box(OCCUPANCY), sq)
            })
        })
    });
}

pub fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table construction");
    group.sample_size(10);
    group.bench_function("fancy", |b| b.iter(MagicTable::<FancyMagic>::saved));
    group.bench_function("black", |b| b.iter(MagicTable::<BlackMagic>::saved));
    group.finish();
}

criterion_group!(
    benches,
    bench_rook_lookup,
    bench_queen_lookup,
    bench_ray_tracing,
    bench_table_build
);
criterion_main!(benches);
