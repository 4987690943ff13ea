// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board};

// across plays: x, y is the leftmost square.
// down plays: x, y is the topmost square.
// word: 0 for a tile already on the board, 1 for A, 0x81 for blank-as-A.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub x: u8,
    pub y: u8,
    pub down: bool,
    pub word: Box<[u8]>,
}

impl Move {
    #[inline(always)]
    pub fn cell(&self, i: usize) -> (usize, usize) {
        if self.down {
            (self.x as usize, self.y as usize + i)
        } else {
            (self.x as usize + i, self.y as usize)
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.word.len()).map(|i| self.cell(i))
    }

    pub fn num_played(&self) -> usize {
        self.word.iter().filter(|&&t| t != 0).count()
    }

    // tiles taken from the hand, blanks as 0.
    pub fn played_tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.word
            .iter()
            .filter(|&&t| t != 0)
            .map(|&t| if t & 0x80 != 0 { 0 } else { t })
    }

    // Compact form: x, y and length as '0' + n, then 'a' or 'd', then the
    // letters with '_' for tiles already on the board.
    pub fn wire(&self, alphabet: &alphabet::Alphabet<'_>) -> String {
        let mut s = String::with_capacity(4 + self.word.len());
        s.push((b'0' + self.x) as char);
        s.push((b'0' + self.y) as char);
        s.push(if self.down { 'd' } else { 'a' });
        s.push((b'0' + self.word.len() as u8) as char);
        for &tile in self.word.iter() {
            s.push_str(alphabet.from_board(tile).unwrap_or("_"));
        }
        s
    }

    #[inline(always)]
    pub fn fmt<'a>(
        &'a self,
        alphabet: &'a alphabet::Alphabet<'a>,
        board: &'a board::Board,
    ) -> WriteableMove<'a> {
        WriteableMove {
            play: self,
            alphabet,
            board,
        }
    }
}

pub struct WriteableMove<'a> {
    play: &'a Move,
    alphabet: &'a alphabet::Alphabet<'a>,
    board: &'a board::Board,
}

impl std::fmt::Display for WriteableMove<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let play = self.play;
        let col = (play.x + 0x41) as char;
        if play.down {
            write!(f, "{}{} ", col, play.y + 1)?;
        } else {
            write!(f, "{}{} ", play.y + 1, col)?;
        }
        let mut inside = false;
        for (i, &w) in play.word.iter().enumerate() {
            if w == 0 {
                if !inside {
                    write!(f, "(")?;
                    inside = true;
                }
                let (x, y) = play.cell(i);
                write!(
                    f,
                    "{}",
                    self.alphabet.from_board(self.board.at(x, y)).unwrap_or("?")
                )?;
            } else {
                if inside {
                    write!(f, ")")?;
                    inside = false;
                }
                write!(f, "{}", self.alphabet.from_board(w).unwrap_or("?"))?;
            }
        }
        if inside {
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::board::{Board, Hand};

    fn cats() -> (Board, Move) {
        let mut board = Board::empty(Hand::default());
        board.place(&ENGLISH_ALPHABET, 7, 7, false, "CAT").unwrap();
        let play = Move {
            x: 7,
            y: 7,
            down: false,
            word: vec![0, 0, 0, 19].into_boxed_slice(),
        };
        (board, play)
    }

    #[test]
    fn wire_marks_tiles_on_board() {
        let (_, play) = cats();
        assert_eq!(play.wire(&ENGLISH_ALPHABET), "77a4___S");
    }

    #[test]
    fn wire_goes_past_nine() {
        let play = Move {
            x: 12,
            y: 3,
            down: true,
            word: vec![0x83, 1, 2].into_boxed_slice(),
        };
        assert_eq!(play.wire(&ENGLISH_ALPHABET), "<3d3cAB");
    }

    #[test]
    fn human_format_brackets_tiles_on_board() {
        let (board, play) = cats();
        assert_eq!(play.fmt(&ENGLISH_ALPHABET, &board).to_string(), "8H (CAT)S");
        let down = Move {
            x: 10,
            y: 6,
            down: true,
            word: vec![1, 0x93].into_boxed_slice(),
        };
        assert_eq!(down.fmt(&ENGLISH_ALPHABET, &board).to_string(), "K7 As");
    }

    #[test]
    fn played_tiles_count_blanks_as_blanks() {
        let play = Move {
            x: 0,
            y: 0,
            down: false,
            word: vec![0x83, 0, 2].into_boxed_slice(),
        };
        assert_eq!(play.num_played(), 2);
        assert_eq!(play.played_tiles().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(play.cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (2, 0)]);
    }
}
