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

//! Tests for checking candidate magics with the public validation helpers.

use fiddler_magic::{
    constants, validate, Bitboard, BlackMagic, FancyMagic, MagicError, MagicScheme, MagicTable,
    Slider, Square,
};

#[test]
/// Every saved entry, in both schemes, hashes without harmful collisions.
fn saved_constants_are_perfect_hashes() {
    for slider in Slider::ALL {
        let oracle = |occupancy: Bitboard, sq: Square| slider.attacks(occupancy, sq);
        for (sq, entry) in Square::ALL.into_iter().zip(FancyMagic::saved(slider)) {
            assert_eq!(validate::find_collision(&entry, sq, oracle), None, "{slider} {sq}");
        }
        for (sq, entry) in Square::ALL.into_iter().zip(BlackMagic::saved(slider)) {
            assert_eq!(validate::find_collision(&entry, sq, oracle), None, "{slider} {sq}");
        }
    }
}

#[test]
/// The table is exactly as large as the sum of the widths of its entries.
fn table_size_is_sum_of_widths() {
    fn total_width<M: MagicScheme>() -> usize {
        Slider::ALL
            .iter()
            .flat_map(|&slider| M::saved(slider))
            .map(|entry| validate::width(&entry))
            .sum()
    }

    assert_eq!(MagicTable::<FancyMagic>::saved().len(), total_width::<FancyMagic>());
    assert_eq!(MagicTable::<BlackMagic>::saved().len(), total_width::<BlackMagic>());
}

#[test]
/// A search for denser magics could compare widths like this: the tuned bit counts never need
/// more room than one key per mask subset.
fn tuned_bits_are_no_wider_than_generic_bits() {
    for sq in Square::ALL {
        let mask = Slider::Rook.mask(sq);
        let tuned = FancyMagic::new(
            mask,
            constants::SAVED_ROOK_MAGICS[sq as usize],
            constants::ROOK_BITS[sq as usize],
        );
        assert!(validate::width(&tuned) <= 1 << mask.len(), "{sq}");
    }
}

#[test]
/// Pairing a magic with a shift it was not found for is caught before a table is built.
fn mismatched_shift_is_rejected() {
    // a bishop on a1 has 7 distinct attack sets, which cannot fit in 2 bits of key
    let sq = Square::A1;
    let mask = Slider::Bishop.mask(sq);
    let squeezed = FancyMagic::new(mask, constants::SAVED_BISHOP_MAGICS[0], 2);
    assert!(!validate::is_valid(&squeezed, sq, |o, s| Slider::Bishop.attacks(o, s)));

    let mut bishops = FancyMagic::saved(Slider::Bishop);
    bishops[sq as usize] = squeezed;
    let result = MagicTable::try_build(bishops, FancyMagic::saved(Slider::Rook));
    assert!(matches!(
        result,
        Err(MagicError::Collision {
            slider: Slider::Bishop,
            square: Square::A1,
            ..
        })
    ));
}

#[test]
/// Keys of a placed entry start where the previous square's keys ended.
fn offsets_accumulate() {
    let table = MagicTable::<BlackMagic>::saved();
    let bishops = table.entries(Slider::Bishop);
    for pair in bishops.windows(2) {
        assert_eq!(validate::max_key(&pair[0]) + 1, validate::min_key(&pair[1]));
    }
    let last_bishop = &bishops[63];
    let first_rook = &table.entries(Slider::Rook)[0];
    assert_eq!(validate::max_key(last_bishop) + 1, validate::min_key(first_rook));
    assert_eq!(validate::min_key(&bishops[0]), 0);
}
