//! Board squares addressed by (rank, file).

use std::fmt;
use std::str::FromStr;

use crate::error::RulesError;

/// A square on the chess board, stored as `rank * 8 + file`.
///
/// Rank 0 is White's back rank, file 0 is the a-file, so A1 = 0 and H8 = 63.
/// A `Square` is always on the board; raw coordinates are checked by
/// [`Square::new`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Create a square from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::OutOfBounds`] if either coordinate is outside `0..8`.
    pub fn new(rank: i16, file: i16) -> Result<Square, RulesError> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Ok(Square(rank as u8 * 8 + file as u8))
        } else {
            Err(RulesError::OutOfBounds { rank, file })
        }
    }

    /// Create a square from coordinates already known to be in `0..8`.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        Some(Square::at(rank_byte - b'1', file_byte - b'a'))
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Return the square displaced by `(dr, df)`, or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Option<Square> {
        let rank = self.rank() as i8 + dr;
        let file = self.file() as i8 + df;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square::at(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Shade of the square: equal for two squares of the same color.
    #[inline]
    pub const fn parity(self) -> u8 {
        (self.rank() + self.file()) % 2
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = RulesError;

    /// Parse a file letter followed by a rank number.
    ///
    /// Well-formed names off the board (`i9`, `a0`) report their
    /// coordinates as [`RulesError::OutOfBounds`].
    fn from_str(s: &str) -> Result<Square, RulesError> {
        let invalid = || RulesError::InvalidSquareName { found: s.to_string() };
        let mut chars = s.chars();
        let file = match chars.next() {
            Some(c) if c.is_ascii_lowercase() => c as i16 - 'a' as i16,
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let rank: i16 = digits.parse().map_err(|_| invalid())?;
        Square::new(rank - 1, file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
