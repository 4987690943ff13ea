// Copyright (C) 2020-2026 Andy Kurnia. All rights reserved.

use super::{alphabet, board};
use board::{BOARD_SIZE, CENTER};

#[inline(always)]
pub fn empty_label(x: usize, y: usize) -> &'static str {
    if x == CENTER && y == CENTER { "*" } else { " " }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board: &board::Board,
    x: usize,
    y: usize,
) -> &'a str {
    alphabet
        .from_board(board.at(x, y))
        .unwrap_or_else(|| empty_label(x, y))
}

pub fn write_board<'a, W: std::fmt::Write>(
    out: &mut W,
    alphabet: &'a alphabet::Alphabet<'a>,
    board: &board::Board,
) -> std::fmt::Result {
    write!(out, "  ")?;
    for x in 0..BOARD_SIZE {
        write!(out, " {}", ((x as u8) + 0x61) as char)?;
    }
    writeln!(out)?;
    write!(out, "  +")?;
    for _ in 1..BOARD_SIZE {
        write!(out, "--")?;
    }
    writeln!(out, "-+")?;
    for y in 0..BOARD_SIZE {
        write!(out, "{:2}|", y + 1)?;
        for x in 0..BOARD_SIZE {
            if x > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", board_label(alphabet, board, x, y))?;
        }
        writeln!(out, "|{}", y + 1)?;
    }
    write!(out, "  +")?;
    for _ in 1..BOARD_SIZE {
        write!(out, "--")?;
    }
    writeln!(out, "-+")?;
    write!(out, "  ")?;
    for x in 0..BOARD_SIZE {
        write!(out, " {}", ((x as u8) + 0x61) as char)?;
    }
    writeln!(out)?;
    write!(out, "hand: ")?;
    for tile in board.hand.tiles() {
        write!(out, "{}", alphabet.from_rack(tile).unwrap_or("?"))?;
    }
    writeln!(out)
}

// to stderr, stdout is for moves.
pub fn print_board<'a>(alphabet: &'a alphabet::Alphabet<'a>, board: &board::Board) {
    let mut s = String::new();
    if write_board(&mut s, alphabet, board).is_ok() {
        eprint!("{}", s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::board::{Board, Hand};

    #[test]
    fn renders_tiles_star_and_hand() {
        let mut board = Board::empty(Hand::from_rack(&[0, 19]));
        board.place(&ENGLISH_ALPHABET, 0, 0, false, "Qi").unwrap();
        let mut s = String::new();
        write_board(&mut s, &ENGLISH_ALPHABET, &board).unwrap();
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], "   a b c d e f g h i j k l m n o");
        assert!(lines[2].starts_with(" 1|Q i  "));
        assert_eq!(lines[9], format!(" 8|{}*{}|8", " ".repeat(14), " ".repeat(14)));
        assert_eq!(lines[19], "hand: ?S");
    }
}
