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

//! Tests for the process-wide attack lookups.

use fiddler_magic::{
    bishop_attacks, init, queen_attacks, rays, rook_attacks, Bitboard, BlackMagic, FancyMagic,
    MagicTable, Slider, Square, MAGIC,
};

/// Build a bitboard from a list of squares.
fn squares(list: &[Square]) -> Bitboard {
    list.iter()
        .fold(Bitboard::EMPTY, |bb, &sq| bb.with_square(sq))
}

#[test]
/// A rook in the corner of an empty board sees its whole rank and file.
fn corner_on_empty_board() {
    let a_file = Bitboard::new(0x0101_0101_0101_0100);
    let first_rank = Bitboard::new(0xFE);
    assert_eq!(rook_attacks(Bitboard::EMPTY, Square::A1), a_file | first_rank);
    assert_eq!(
        bishop_attacks(Bitboard::EMPTY, Square::A1),
        Bitboard::new(0x8040_2010_0804_0200)
    );
}

#[test]
/// A rook on d4 with a blocker on d6 stops there when moving north.
fn blocker_ahead_of_rook() {
    let occupancy = Bitboard::from(Square::D6);
    let expected = squares(&[
        Square::D5,
        Square::D6,
        Square::D3,
        Square::D2,
        Square::D1,
        Square::E4,
        Square::F4,
        Square::G4,
        Square::H4,
        Square::C4,
        Square::B4,
        Square::A4,
    ]);
    let attacks = rook_attacks(occupancy, Square::D4);
    assert_eq!(attacks, expected);
    assert!(!attacks.contains(Square::D7));
    assert!(!attacks.contains(Square::D8));
    // the diagonals never see d6
    assert_eq!(
        bishop_attacks(occupancy, Square::D4),
        bishop_attacks(Bitboard::EMPTY, Square::D4)
    );
}

#[test]
/// On a full board, every ray from d4 reaches only the neighboring square.
fn full_board_truncates_every_ray() {
    assert_eq!(
        rook_attacks(Bitboard::ALL, Square::D4),
        squares(&[Square::D5, Square::D3, Square::C4, Square::E4])
    );
    assert_eq!(
        bishop_attacks(Bitboard::ALL, Square::D4),
        squares(&[Square::C5, Square::E5, Square::C3, Square::E3])
    );
    assert_eq!(
        queen_attacks(Bitboard::ALL, Square::D4),
        squares(&[
            Square::C3,
            Square::D3,
            Square::E3,
            Square::C4,
            Square::E4,
            Square::C5,
            Square::D5,
            Square::E5,
        ])
    );
}

#[test]
/// Sliders in the starting position only see their direct neighbors.
fn starting_position() {
    let occupancy = Bitboard::new(0xFFFF_0000_0000_FFFF);
    assert_eq!(rook_attacks(occupancy, Square::A1), squares(&[Square::A2, Square::B1]));
    assert_eq!(bishop_attacks(occupancy, Square::C1), squares(&[Square::B2, Square::D2]));
    assert_eq!(
        queen_attacks(occupancy, Square::D8),
        squares(&[
            Square::C8,
            Square::E8,
            Square::C7,
            Square::D7,
            Square::E7,
        ])
    );
}

#[test]
/// Random occupancies, including irrelevant squares, must agree with ray tracing.
fn random_occupancies_match_rays() {
    init();
    let mut rng = fastrand::Rng::with_seed(0x5EED);
    for _ in 0..20_000 {
        // sparse and dense boards both appear
        let occupancy = if rng.bool() {
            Bitboard::new(rng.u64(..) & rng.u64(..))
        } else {
            Bitboard::new(rng.u64(..) | rng.u64(..))
        };
        let sq = Square::ALL[rng.usize(..64)];
        assert_eq!(bishop_attacks(occupancy, sq), rays::bishop_attacks(occupancy, sq));
        assert_eq!(rook_attacks(occupancy, sq), rays::rook_attacks(occupancy, sq));
        assert_eq!(
            queen_attacks(occupancy, sq),
            bishop_attacks(occupancy, sq) | rook_attacks(occupancy, sq)
        );
    }
}

#[test]
/// Both schemes give the same answer to every query.
fn schemes_agree() {
    let fancy = MagicTable::<FancyMagic>::saved();
    let black = MagicTable::<BlackMagic>::saved();
    let mut rng = fastrand::Rng::with_seed(17);
    for _ in 0..10_000 {
        let occupancy = Bitboard::new(rng.u64(..));
        let sq = Square::ALL[rng.usize(..64)];
        for slider in Slider::ALL {
            assert_eq!(
                fancy.attacks(slider, occupancy, sq),
                black.attacks(slider, occupancy, sq)
            );
        }
    }
}

#[test]
/// Repeated queries give repeated answers, and the global table is the saved one.
fn queries_are_stable() {
    let occupancy = Bitboard::new(0x0024_0810_4200_1800);
    for sq in Square::ALL {
        assert_eq!(queen_attacks(occupancy, sq), queen_attacks(occupancy, sq));
    }
    assert_eq!(*MAGIC, MagicTable::saved());
}

#[test]
/// Readers on several threads see the same table.
fn shared_between_threads() {
    let occupancy = Bitboard::new(0x0000_1028_0044_0000);
    let expected: Vec<Bitboard> = Square::ALL
        .iter()
        .map(|&sq| queen_attacks(occupancy, sq))
        .collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                Square::ALL
                    .iter()
                    .map(|&sq| queen_attacks(occupancy, sq))
                    .collect::<Vec<Bitboard>>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
