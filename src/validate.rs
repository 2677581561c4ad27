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

//! Diagnostics for candidate magic entries.
//!
//! These are the building blocks a magic search needs: a validity check against the ray-traced
//! attacks, and the spread of keys an entry produces, which a search tries to make as small as
//! possible.

use super::{Bitboard, MagicScheme, Square};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Two relevant occupancies which hash to the same key but produce different attacks.
pub struct Collision {
    /// The key shared by both occupancies.
    pub key: usize,
    /// The occupancy which was hashed first.
    pub first: Bitboard,
    /// The occupancy which was hashed second.
    pub second: Bitboard,
}

#[must_use]
/// Get the smallest and largest keys `entry` produces over every subset of its mask.
pub fn key_bounds<M: MagicScheme>(entry: &M) -> (usize, usize) {
    bounds(entry, |occupancy| entry.key(occupancy))
}

/// Get the smallest and largest values of `hash` over every subset of the mask of `entry`.
fn bounds<M: MagicScheme>(entry: &M, hash: impl Fn(Bitboard) -> usize) -> (usize, usize) {
    entry
        .mask()
        .subsets()
        .map(hash)
        .fold((usize::MAX, usize::MIN), |(min, max), key| {
            (min.min(key), max.max(key))
        })
}

#[must_use]
/// Get the smallest key `entry` produces.
pub fn min_key<M: MagicScheme>(entry: &M) -> usize {
    key_bounds(entry).0
}

#[must_use]
/// Get the largest key `entry` produces.
pub fn max_key<M: MagicScheme>(entry: &M) -> usize {
    key_bounds(entry).1
}

#[must_use]
/// Get the number of table slots `entry` spans, from its smallest key to its largest.
/// The offset of `entry` has no effect on its width.
pub fn width<M: MagicScheme>(entry: &M) -> usize {
    let (min, max) = bounds(entry, |occupancy| entry.raw_key(occupancy));
    max - min + 1
}

/// Search for two occupancies which `entry` hashes to the same key, but which `oracle` says have
/// different attacks from `sq`.
/// Occupancies with equal attacks may share a key freely.
pub fn find_collision<M, F>(entry: &M, sq: Square, oracle: F) -> Option<Collision>
where
    M: MagicScheme,
    F: Fn(Bitboard, Square) -> Bitboard,
{
    let mut hashed: Vec<(usize, Bitboard, Bitboard)> = entry
        .mask()
        .subsets()
        .map(|occupancy| (entry.key(occupancy), occupancy, oracle(occupancy, sq)))
        .collect();
    hashed.sort_by_key(|&(key, _, _)| key);

    // within a run of equal keys, differing attacks must show up between neighbors
    hashed.windows(2).find_map(|pair| {
        let (key, first, first_attacks) = pair[0];
        let (next_key, second, second_attacks) = pair[1];
        (key == next_key && first_attacks != second_attacks).then_some(Collision {
            key,
            first,
            second,
        })
    })
}

#[must_use]
/// Determine whether `entry` hashes every relevant occupancy of `sq` without a harmful
/// collision.
pub fn is_valid<M, F>(entry: &M, sq: Square, oracle: F) -> bool
where
    M: MagicScheme,
    F: Fn(Bitboard, Square) -> Bitboard,
{
    find_collision(entry, sq, oracle).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rays, BlackMagic, FancyMagic, Slider};

    #[test]
    fn saved_magics_are_valid() {
        for slider in Slider::ALL {
            let oracle = |occupancy, sq| slider.attacks(occupancy, sq);
            for (sq, entry) in Square::ALL.into_iter().zip(FancyMagic::saved(slider)) {
                assert!(is_valid(&entry, sq, oracle), "fancy {slider} {sq}");
            }
            for (sq, entry) in Square::ALL.into_iter().zip(BlackMagic::saved(slider)) {
                assert!(is_valid(&entry, sq, oracle), "black {slider} {sq}");
            }
        }
    }

    #[test]
    fn zero_magic_collides() {
        let sq = Square::D4;
        let entry = FancyMagic::with_mask_bits(Slider::Rook.mask(sq), 0);
        let collision = find_collision(&entry, sq, rays::rook_attacks);
        let Some(collision) = collision else {
            panic!("a zero magic sends every occupancy to key 0");
        };
        assert_eq!(collision.key, 0);
        assert_ne!(
            rays::rook_attacks(collision.first, sq),
            rays::rook_attacks(collision.second, sq)
        );
    }

    #[test]
    fn widths_fit_in_bits() {
        for slider in Slider::ALL {
            for entry in FancyMagic::saved(slider) {
                let w = width(&entry);
                assert!(w <= 1 << entry.bits());
                assert!(w >= 1);
                assert_eq!(w, max_key(&entry) - min_key(&entry) + 1);
            }
        }
    }

    #[test]
    fn width_ignores_wrapping_offset() {
        for slider in Slider::ALL {
            for entry in BlackMagic::saved(slider) {
                let wrapped = entry.with_offset(usize::MAX - 3);
                assert_eq!(width(&wrapped), width(&entry));
            }
            for entry in FancyMagic::saved(slider) {
                assert_eq!(width(&entry.with_offset(usize::MAX)), width(&entry));
            }
        }
    }

    #[test]
    fn bounds_follow_offset() {
        let entry = BlackMagic::saved(Slider::Rook)[Square::A1 as usize];
        let (min, max) = key_bounds(&entry);
        let moved = entry.with_offset(1000);
        assert_eq!(key_bounds(&moved), (min + 1000, max + 1000));
        assert_eq!(width(&moved), width(&entry));
    }
}
