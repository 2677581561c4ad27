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

//! Hashing schemes which turn an occupancy into an index into an attack table.
//!
//! Both schemes multiply a 64-bit occupancy by a magic constant and keep the top bits of the
//! product. They differ in how irrelevant squares are removed before the multiplication:
//!
//! - Fancy magics clear every square outside the mask, and may use any number of index bits per
//!   square.
//! - Black magics set every square outside the mask, and use a fixed number of index bits for
//!   each slider family.
//!
//! Tables are generic over [`MagicScheme`], so the choice of scheme costs nothing at lookup time.

use super::{constants, Bitboard, Slider, Square};

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::FancyMagic {}
    impl Sealed for super::BlackMagic {}
}

/// An entry of a magic lookup table for one square.
///
/// Lookups index the attack table without bounds checks. This is sound only if `raw_key` ignores
/// every square outside `mask`, since the table is built from subsets of the mask alone. The
/// trait is therefore sealed: `FancyMagic` and `BlackMagic` are its only implementors.
///
/// ```compile_fail
/// use fiddler_magic::{Bitboard, FancyMagic, MagicScheme, Slider};
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// struct Leaky(FancyMagic);
///
/// impl MagicScheme for Leaky {
///     const NAME: &'static str = "leaky";
///
///     fn saved(slider: Slider) -> [Self; 64] {
///         FancyMagic::saved(slider).map(Leaky)
///     }
///
///     fn mask(&self) -> Bitboard {
///         self.0.mask()
///     }
///
///     fn offset(&self) -> usize {
///         self.0.offset()
///     }
///
///     fn with_offset(self, offset: usize) -> Self {
///         Leaky(self.0.with_offset(offset))
///     }
///
///     // hashes squares outside the mask
///     fn raw_key(&self, occupancy: Bitboard) -> usize {
///         self.0.raw_key(occupancy) + usize::from(occupancy.len()) * 1_000_000
///     }
/// }
/// ```
pub trait MagicScheme: sealed::Sealed + Copy + Debug + Eq + Send + Sync + 'static {
    /// A human-readable name for this scheme.
    const NAME: &'static str;

    /// Get the saved entries for every square of `slider`, with offsets all zero.
    fn saved(slider: Slider) -> [Self; 64];

    /// Get the relevant-occupancy mask this entry hashes.
    fn mask(&self) -> Bitboard;

    /// Get the offset added to every key of this entry.
    fn offset(&self) -> usize;

    /// Get a copy of this entry with a different offset.
    #[must_use]
    fn with_offset(self, offset: usize) -> Self;

    /// Hash `occupancy` without adding the offset.
    fn raw_key(&self, occupancy: Bitboard) -> usize;

    #[inline(always)]
    /// Hash `occupancy` into an index in the attack table.
    /// Squares outside the mask never affect the result.
    fn key(&self, occupancy: Bitboard) -> usize {
        self.raw_key(occupancy).wrapping_add(self.offset())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A fancy magic: the occupancy is masked, multiplied, and shifted down to a per-square number of
/// bits.
pub struct FancyMagic {
    /// A mask which, when &ed with the occupancy bitboard, will give only the bits that matter
    /// when computing moves.
    mask: Bitboard,
    /// The magic number to multiply to hash the current board effectively.
    magic: u64,
    /// The shift to extract an index from a multiplied constant.
    shift: u8,
    /// Where this square's keys start in the shared attack table.
    offset: usize,
}

impl FancyMagic {
    #[must_use]
    /// Create a fancy magic entry producing `bits`-bit keys.
    ///
    /// # Panics
    ///
    /// This function will panic if `bits` is not between 1 and 63.
    pub const fn new(mask: Bitboard, magic: u64, bits: u8) -> FancyMagic {
        assert!(bits >= 1 && bits < 64, "magic key must have between 1 and 63 bits");
        FancyMagic {
            mask,
            magic,
            shift: 64 - bits,
            offset: 0,
        }
    }

    #[must_use]
    /// Create a fancy magic entry with one key bit per square of `mask`, the widest a working
    /// magic ever needs.
    ///
    /// # Panics
    ///
    /// This function will panic if `mask` is empty.
    pub const fn with_mask_bits(mask: Bitboard, magic: u64) -> FancyMagic {
        FancyMagic::new(mask, magic, mask.len())
    }

    #[must_use]
    /// Get the magic multiplier of this entry.
    pub const fn magic(&self) -> u64 {
        self.magic
    }

    #[must_use]
    /// Get the number of bits in keys of this entry.
    pub const fn bits(&self) -> u8 {
        64 - self.shift
    }
}

impl MagicScheme for FancyMagic {
    const NAME: &'static str = "fancy";

    fn saved(slider: Slider) -> [Self; 64] {
        let (magics, bits) = match slider {
            Slider::Bishop => (&constants::SAVED_BISHOP_MAGICS, &constants::BISHOP_BITS),
            Slider::Rook => (&constants::SAVED_ROOK_MAGICS, &constants::ROOK_BITS),
        };
        Square::ALL.map(|sq| {
            FancyMagic::new(slider.mask(sq), magics[sq as usize], bits[sq as usize])
        })
    }

    #[inline(always)]
    fn mask(&self) -> Bitboard {
        self.mask
    }

    #[inline(always)]
    fn offset(&self) -> usize {
        self.offset
    }

    fn with_offset(self, offset: usize) -> Self {
        FancyMagic { offset, ..self }
    }

    #[inline(always)]
    fn raw_key(&self, occupancy: Bitboard) -> usize {
        usize::from(((occupancy & self.mask) * Bitboard::new(self.magic)) >> self.shift)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A black magic: every square outside the mask is filled before multiplying, and the key width
/// is fixed for each slider family.
pub struct BlackMagic {
    /// The complement of the relevant-occupancy mask.
    not_mask: Bitboard,
    /// The magic number to multiply to hash the current board effectively.
    magic: u64,
    /// The shift to extract an index from a multiplied constant.
    shift: u8,
    /// Where this square's keys start in the shared attack table, biased by the smallest raw key.
    offset: usize,
}

impl BlackMagic {
    #[must_use]
    /// Create a black magic entry for `slider` on `sq`.
    pub fn new(slider: Slider, sq: Square, magic: u64) -> BlackMagic {
        BlackMagic {
            not_mask: !slider.mask(sq),
            magic,
            shift: 64 - slider.black_magic_bits(),
            offset: 0,
        }
    }

    #[must_use]
    /// Get the magic multiplier of this entry.
    pub const fn magic(&self) -> u64 {
        self.magic
    }
}

impl MagicScheme for BlackMagic {
    const NAME: &'static str = "black";

    fn saved(slider: Slider) -> [Self; 64] {
        let magics = match slider {
            Slider::Bishop => &constants::BLACK_BISHOP_MAGICS,
            Slider::Rook => &constants::BLACK_ROOK_MAGICS,
        };
        Square::ALL.map(|sq| BlackMagic::new(slider, sq, magics[sq as usize]))
    }

    #[inline(always)]
    fn mask(&self) -> Bitboard {
        !self.not_mask
    }

    #[inline(always)]
    fn offset(&self) -> usize {
        self.offset
    }

    fn with_offset(self, offset: usize) -> Self {
        BlackMagic { offset, ..self }
    }

    #[inline(always)]
    fn raw_key(&self, occupancy: Bitboard) -> usize {
        usize::from(((occupancy | self.not_mask) * Bitboard::new(self.magic)) >> self.shift)
    }
}
