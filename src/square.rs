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

//! Squares, which are positions on a board.

use super::Direction;

use std::{
    fmt::{Display, Formatter},
    mem::transmute,
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[rustfmt::skip]
/// A square: one of 64 spots on a board that a sliding piece can occupy.
///
/// Internally, `Square`s are represented as a single integer to maintain a small size.
/// From MSB to LSB, each square is composed of:
/// * 2 unused bits
/// * 3 bits for the rank
/// * 3 bits for the file
pub enum Square {
    A1 = 0, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Every square on the board, in order from A1 to H8.
    pub const ALL: [Square; 64] = {
        let mut squares = [Square::A1; 64];
        let mut i = 0u8;
        while i < 64 {
            // SAFETY: `i` is always a valid square index.
            squares[i as usize] = unsafe { transmute::<u8, Square>(i) };
            i += 1;
        }
        squares
    };

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Create a `Square` from the given rank and file. The ranks run from 0 to 7 (instead of 1
    /// through 8), and the files run from A to H.
    /// Returns `None` if either coordinate is off the board.
    pub fn new(rank: usize, file: usize) -> Option<Square> {
        if rank >= 8 || file >= 8 {
            return None;
        }
        Square::try_from(((rank << 3) | file) as u8).ok()
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the rank (0 -> 1, ...) of this square.
    pub const fn rank(self) -> usize {
        (self as u8 >> 3u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the file (0 -> A, ...) of this square.
    pub const fn file(self) -> usize {
        (self as u8 & 7u8) as usize
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Get the Chebyshev distance to another square.
    pub const fn chebyshev_to(self, rhs: Square) -> u8 {
        let rankdiff = self.rank().abs_diff(rhs.rank());
        let filediff = self.file().abs_diff(rhs.file());

        if rankdiff > filediff {
            rankdiff as u8
        } else {
            filediff as u8
        }
    }

    #[must_use]
    /// Take a single step in `dir` from this square.
    /// Returns `None` if the step would leave the board, either by running off the top or bottom
    /// or by wrapping around the side.
    pub fn step(self, dir: Direction) -> Option<Square> {
        let next = i16::from(self as u8) + i16::from(dir.0);
        let next = u8::try_from(next).ok()?;
        let next = Square::try_from(next).ok()?;
        (self.chebyshev_to(next) == 1).then_some(next)
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square representing A1 will
    /// have the name "a".
    pub fn file_name(self) -> &'static str {
        ["a", "b", "c", "d", "e", "f", "g", "h"][self.file()]
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = &'static str;
    #[inline(always)]
    fn try_from(x: u8) -> Result<Square, Self::Error> {
        match x {
            // This transmutation is safe because x will always be less than
            // the total number of squares.
            x if x <= Square::H8 as u8 => Ok(unsafe { transmute::<u8, Square>(x) }),
            _ => Err("input for square conversion is out of bounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bitboard;

    #[test]
    fn rank_and_file() {
        assert_eq!(Square::D4.rank(), 3);
        assert_eq!(Square::D4.file(), 3);
        assert_eq!(Square::H1.rank(), 0);
        assert_eq!(Square::H1.file(), 7);
        assert_eq!(Square::new(3, 3), Some(Square::D4));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn step_on_board() {
        assert_eq!(Square::A1.step(Direction::EAST), Some(Square::B1));
        assert_eq!(Square::A1.step(Direction::NORTHEAST), Some(Square::B2));
        assert_eq!(Square::D4.step(Direction::SOUTHWEST), Some(Square::C3));
    }

    #[test]
    fn step_off_board() {
        assert_eq!(Square::A1.step(Direction::SOUTH), None);
        assert_eq!(Square::A1.step(Direction::WEST), None);
        // wrapping from the h-file to the a-file must not count as a step
        assert_eq!(Square::H1.step(Direction::EAST), None);
        assert_eq!(Square::H4.step(Direction::NORTHEAST), None);
        assert_eq!(Square::A5.step(Direction::NORTHWEST), None);
        assert_eq!(Square::H8.step(Direction::NORTH), None);
    }

    #[test]
    fn all_squares_in_order() {
        assert_eq!(Square::ALL[0], Square::A1);
        assert_eq!(Square::ALL[27], Square::D4);
        assert_eq!(Square::ALL[63], Square::H8);
        assert!(Square::ALL.iter().zip(Bitboard::ALL).all(|(&a, b)| a == b));
    }

    #[test]
    fn square_names() {
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::A8.to_string(), "a8");
    }

    #[test]
    fn out_of_bounds_conversion() {
        assert_eq!(Square::try_from(63u8), Ok(Square::H8));
        assert!(Square::try_from(64u8).is_err());
    }
}
