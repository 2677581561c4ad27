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

//! Bitboards, data structures used to efficiently represent sets of squares.

use super::Square;

use std::{
    fmt::{Display, Formatter, LowerHex, Result},
    iter::FusedIterator,
    mem::transmute,
    ops::{BitAnd, BitOr, Mul, Not, Shr, Sub},
};

/// A bitboard, which uses an integer to express a set of `Square`s.
/// This expression allows the efficient computation of set intersection, union, disjunction,
/// element selection, and more, all in constant time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard representing the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiddler_magic::{Bitboard, Square};
    ///
    /// assert!(!Bitboard::EMPTY.contains(Square::A1));
    /// ```
    pub const EMPTY: Bitboard = Bitboard::new(0);

    /// A bitboard containing all 64 squares on the board, i.e. the universal set.
    ///
    /// Often, it can be used as an efficient way to iterate over every square of a board.
    ///
    /// ```
    /// use fiddler_magic::Bitboard;
    ///
    /// assert_eq!(Bitboard::ALL.count(), 64);
    /// ```
    pub const ALL: Bitboard = Bitboard::new(!0);

    /// The squares on the outer ring of the board.
    pub const EDGES: Bitboard = Bitboard::new(0xFF81_8181_8181_81FF);

    #[inline(always)]
    #[must_use]
    /// Construct a new `Bitboard` from a numeric literal.
    /// The LSB represents whether A1 is an element, the next bit B1, and so on up to H8.
    pub const fn new(x: u64) -> Bitboard {
        Bitboard(x)
    }

    #[inline(always)]
    #[must_use]
    /// Get the raw integer behind this bitboard.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this bitboard contains a given square.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiddler_magic::{Bitboard, Square};
    ///
    /// assert!(Bitboard::new(1).contains(Square::A1));
    /// assert!(!(Bitboard::new(2).contains(Square::A1)));
    /// ```
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u8) != 0
    }

    #[inline(always)]
    /// Add a square to the set of squares contained in this `Bitboard`.
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq as u8;
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this bitboard with `sq` added.
    pub const fn with_square(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | 1 << sq as u8)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    /// Compute the number of squares contained in this `Bitboard`.
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline(always)]
    #[must_use]
    /// Count the number of trailing zeros (i.e. empty squares between A1 and the first non-empty
    /// square) in this bitboard.
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    #[inline(always)]
    #[must_use]
    /// Count the number of leading zeros (i.e. empty squares between H8 and the highest non-empty
    /// square). Will be zero if H8 is occupied.
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this bitboard is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    #[must_use]
    /// Iterate over every subset of this bitboard, using the carry-rippler trick.
    ///
    /// The empty set is always visited first, and every subset is visited exactly once, so a
    /// bitboard with `n` squares produces `2^n` subsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiddler_magic::Bitboard;
    ///
    /// let mask = Bitboard::new(0b1010);
    /// let subsets: Vec<Bitboard> = mask.subsets().collect();
    /// assert_eq!(
    ///     subsets,
    ///     vec![
    ///         Bitboard::new(0b0000),
    ///         Bitboard::new(0b0010),
    ///         Bitboard::new(0b1000),
    ///         Bitboard::new(0b1010),
    ///     ]
    /// );
    /// ```
    pub const fn subsets(self) -> Subsets {
        Subsets {
            mask: self,
            current: Bitboard::EMPTY,
            done: false,
        }
    }
}

/// An iterator over all subsets of a mask, produced by [`Bitboard::subsets`].
#[derive(Clone, Debug)]
pub struct Subsets {
    mask: Bitboard,
    current: Bitboard,
    done: bool,
}

impl Iterator for Subsets {
    type Item = Bitboard;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // yield first, then test for wraparound: the empty subset is both the first and the
        // terminating state
        let subset = self.current;
        self.current = (self.current - self.mask) & self.mask;
        self.done = self.current.is_empty();
        Some(subset)
    }
}

impl FusedIterator for Subsets {}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Compute the intersection of the sets represented by this bitboard and the right-hand side.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiddler_magic::{Bitboard, Square};
    ///
    /// let bb1 = Bitboard::new(7); // {A1, B1, C1}
    /// let bb2 = Bitboard::new(14); // {B1, C1, D1}
    /// let intersection = bb1 & bb2; // {B1, C1}
    /// assert!(!intersection.contains(Square::A1));
    /// assert!(intersection.contains(Square::B1));
    /// assert!(intersection.contains(Square::C1));
    /// assert!(!intersection.contains(Square::D1));
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl Shr<u8> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u8) -> Self::Output {
        Bitboard(self.0 >> rhs)
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Sub for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Bitboard(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Bitboard(self.0.wrapping_mul(rhs.0))
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u8)
    }
}

impl From<Bitboard> for usize {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        {
            bb.0 as usize
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for row_idx in 0..8 {
            for col_idx in 0..8 {
                let bit = 1 << ((8 * (7 - row_idx)) + col_idx);
                if bit & self.0 == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "1 ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl LowerHex for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&self.0, f)
    }
}

#[allow(clippy::copy_iterator)]
impl Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: The empty bitboard case has been handled already, so the
        // number of trailing zeros is between 0 and 63.
        #[allow(clippy::cast_possible_truncation)]
        let result = Some(unsafe { transmute::<u8, Square>(self.trailing_zeros() as u8) });
        self.0 &= self.0 - 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
