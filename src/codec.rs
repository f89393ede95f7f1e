//! Conversions between bitboard strings and algebraic coordinates.
//!
//! A bitboard string is the most-significant-bit-first rendering of a 64-bit
//! occupancy mask: the character at position `i` refers to the square with
//! index `63 - i`, so position 0 is h8 and position 63 is a1. Strings shorter
//! than 64 digits are treated as left-padded with '0', and a leading "0b" is
//! accepted and ignored. The position-to-index translation happens in this
//! module and nowhere else.

use std::{error::Error, fmt::Display};

use crate::bitboard::BitBoard;
use crate::options::CodecOptions;
use crate::square::Square;

pub const BOARD_SQUARES: usize = 64;

const BIN_PREFIX: &str = "0b";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    TooManySquares(usize),
    InvalidBit { position: usize, found: char },
    InvalidCoord(String),
    IndexOutOfRange(u8),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::TooManySquares(length) => write!(
                f,
                "a chess board cannot have more than {BOARD_SQUARES} squares, got {length} bits"
            ),
            CodecError::InvalidBit { position, found } => write!(
                f,
                "invalid bit character '{found}' at position {position}, expected '0' or '1'"
            ),
            CodecError::InvalidCoord(coord) => {
                write!(f, "invalid coordinate '{coord}', expected a1 to h8")
            }
            CodecError::IndexOutOfRange(index) => write!(
                f,
                "square index {index} out of range, expected 0 to {}",
                BOARD_SQUARES - 1
            ),
        }
    }
}
impl Error for CodecError {}

/// Parses a bitboard string into a [`BitBoard`] mask.
pub fn bitboard_from_bits_with(
    bits: &str,
    options: CodecOptions,
) -> Result<BitBoard, CodecError> {
    let digits = bits.strip_prefix(BIN_PREFIX).unwrap_or(bits);
    let length = digits.chars().count();
    if length > BOARD_SQUARES {
        return Err(CodecError::TooManySquares(length));
    }

    let mut board = BitBoard::empty();
    for (position, bit) in digits.chars().enumerate() {
        // the leftmost digit is the most significant bit, shorter strings
        // land on the low squares as if left-padded with zeros
        let shift = (length - 1 - position) as u64;
        match bit {
            '0' => {}
            '1' => board |= BitBoard(1) << shift,
            found if options.strict => return Err(CodecError::InvalidBit { position, found }),
            _ => {}
        }
    }
    Ok(board)
}

pub fn bitboard_from_bits(bits: &str) -> Result<BitBoard, CodecError> {
    bitboard_from_bits_with(bits, CodecOptions::default())
}

/// Renders a mask as a 64-digit bitboard string, h8 first.
pub fn bits_from_bitboard(board: BitBoard) -> String {
    format!("{:064b}", board.as_u64())
}

/// Decodes a bitboard string into the coordinates of its occupied squares,
/// in string position order (the h8 end first).
pub fn coords_from_bits_with(
    bits: &str,
    options: CodecOptions,
) -> Result<Vec<String>, CodecError> {
    let board = bitboard_from_bits_with(bits, options)?;
    let mut coords: Vec<String> = board.map(|square| square.coord()).collect();
    coords.reverse();
    Ok(coords)
}

pub fn coords_from_bits(bits: &str) -> Result<Vec<String>, CodecError> {
    coords_from_bits_with(bits, CodecOptions::default())
}

/// Assembles a 64-digit bitboard string from a coordinate list. Duplicate
/// coordinates are idempotent.
pub fn bits_from_coords_with<T: AsRef<str>>(
    coords: &[T],
    options: CodecOptions,
) -> Result<String, CodecError> {
    let mut board = BitBoard::empty();
    for coord in coords {
        let coord = coord.as_ref();
        match Square::from_coord(coord) {
            Some(square) => board.set(square),
            None if options.strict => return Err(CodecError::InvalidCoord(coord.to_string())),
            None => {}
        }
    }
    Ok(bits_from_bitboard(board))
}

pub fn bits_from_coords<T: AsRef<str>>(coords: &[T]) -> Result<String, CodecError> {
    bits_from_coords_with(coords, CodecOptions::default())
}

/// Reverses the characters of a bitboard string. Purely structural, nothing
/// is validated and a "0b" prefix is reversed along with the digits.
pub fn reverse_bits(bits: &str) -> String {
    bits.chars().rev().collect()
}

/// Decodes a bitboard string into ascending square indices.
pub fn indices_from_bits_with(bits: &str, options: CodecOptions) -> Result<Vec<u8>, CodecError> {
    Ok(bitboard_from_bits_with(bits, options)?.squares())
}

pub fn indices_from_bits(bits: &str) -> Result<Vec<u8>, CodecError> {
    indices_from_bits_with(bits, CodecOptions::default())
}

/// Assembles a 64-digit bitboard string from square indices, going through
/// the coordinate mapping.
pub fn bits_from_indices(indices: &[u8]) -> Result<String, CodecError> {
    let mut coords = Vec::with_capacity(indices.len());
    for &index in indices {
        let square = Square::from_index(index).ok_or(CodecError::IndexOutOfRange(index))?;
        coords.push(square.coord());
    }
    bits_from_coords(&coords)
}
