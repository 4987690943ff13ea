// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

pub const BOARD_SIZE: usize = 15;
pub const CENTER: usize = 7;

// hand tally indexed by tile, 0 is the blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hand([u8; alphabet::NUM_TILES]);

impl Hand {
    pub fn from_rack(rack: &[u8]) -> Hand {
        let mut hand = Hand::default();
        for &tile in rack {
            hand.add(tile);
        }
        hand
    }

    #[inline(always)]
    pub fn count(&self, tile: u8) -> u8 {
        self.0[tile as usize]
    }

    #[inline(always)]
    pub fn add(&mut self, tile: u8) {
        self.0[tile as usize] += 1;
    }

    // a copy with one fewer of tile. caller checks count first.
    #[inline(always)]
    pub fn take(&self, tile: u8) -> Hand {
        let mut hand = *self;
        hand.0[tile as usize] -= 1;
        hand
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    // letters this hand can put down. a blank can be anything.
    pub fn candidates(&self, alphabet: &alphabet::Alphabet<'_>) -> u64 {
        if self.count(0) > 0 {
            return alphabet.letters_bits();
        }
        self.0
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &n)| n > 0)
            .fold(0, |bits, (tile, _)| bits | (1 << tile))
    }

    // sorted, with repetition. eg ??EGSUU is 0,0,5,7,19,21,21.
    pub fn tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(tile, &count)| std::iter::repeat_n(tile as u8, count as usize))
    }
}

#[inline(always)]
pub fn on_board(coords: &[isize]) -> bool {
    coords
        .iter()
        .all(|&x| 0 <= x && x < BOARD_SIZE as isize)
}

// tiles[x][y], x is the column and y is the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub tiles: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub hand: Hand,
}

impl Board {
    pub fn empty(hand: Hand) -> Board {
        Board {
            tiles: [[0; BOARD_SIZE]; BOARD_SIZE],
            hand,
        }
    }

    #[inline(always)]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.tiles[x][y]
    }

    // 0 if off board.
    #[inline(always)]
    pub fn at_signed(&self, x: isize, y: isize) -> u8 {
        if on_board(&[x, y]) {
            self.tiles[x as usize][y as usize]
        } else {
            0
        }
    }

    pub fn num_tiles_on_board(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|col| col.iter())
            .filter(|&&t| t != 0)
            .count()
    }

    pub fn transpose(&mut self) {
        for x in 0..BOARD_SIZE {
            for y in x + 1..BOARD_SIZE {
                let t = self.tiles[x][y];
                self.tiles[x][y] = self.tiles[y][x];
                self.tiles[y][x] = t;
            }
        }
    }

    // puts word on the board, lowercase letters being blanks.
    pub fn place(
        &mut self,
        alphabet: &alphabet::Alphabet<'_>,
        x: usize,
        y: usize,
        down: bool,
        word: &str,
    ) -> error::Returns<()> {
        for (i, c) in word.chars().enumerate() {
            let (x, y) = if down { (x, y + i) } else { (x + i, y) };
            if !on_board(&[x as isize, y as isize]) {
                return_error!(Board, format!("{:?} runs off the board", word));
            }
            match alphabet.board_tile_of(c) {
                Some(tile) => self.tiles[x][y] = tile,
                None => {
                    return_error!(Board, format!("invalid tile {:?} in {:?}", c, word));
                }
            }
        }
        Ok(())
    }

    fn parse_hand(
        alphabet: &alphabet::Alphabet<'_>,
        rack: impl Iterator<Item = char>,
    ) -> error::Returns<Hand> {
        let mut hand = Hand::default();
        for c in rack {
            match alphabet.rack_tile_of(c) {
                Some(tile) if hand.count(tile) < u8::MAX => hand.add(tile),
                Some(_) => {
                    return_error!(Board, format!("too many {:?} in hand", c));
                }
                None => {
                    return_error!(Board, format!("invalid hand tile {:?}", c));
                }
            }
        }
        Ok(hand)
    }

    fn parse_square(alphabet: &alphabet::Alphabet<'_>, c: char) -> error::Returns<u8> {
        if c == ' ' {
            return Ok(0);
        }
        match alphabet.board_tile_of(c) {
            Some(tile) => Ok(tile),
            None => {
                return_error!(Board, format!("invalid board tile {:?}", c));
            }
        }
    }

    // The first line longer than 225 characters holds the board, square
    // (x, y) at character x + 15 * y, then a hand size digit and the hand.
    pub fn parse(alphabet: &alphabet::Alphabet<'_>, text: &str) -> error::Returns<Board> {
        let num_squares = BOARD_SIZE * BOARD_SIZE;
        let line = match text
            .lines()
            .find(|line| line.trim_end_matches('\r').chars().count() > num_squares)
        {
            Some(line) => line.trim_end_matches('\r'),
            None => {
                return_error!(
                    Board,
                    format!("need a line of more than {} characters", num_squares)
                );
            }
        };
        let chars = line.chars().collect::<Vec<_>>();
        let mut board = Board::empty(Hand::default());
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                board.tiles[x][y] = Board::parse_square(alphabet, chars[x + y * BOARD_SIZE])?;
            }
        }
        let hand_size = match chars[num_squares].to_digit(10) {
            Some(n) => n as usize,
            None => {
                return_error!(
                    Board,
                    format!("expected hand size digit, found {:?}", chars[num_squares])
                );
            }
        };
        let rack = &chars[num_squares + 1..];
        if rack.len() < hand_size {
            return_error!(
                Board,
                format!("hand size is {} but only {} tiles follow", hand_size, rack.len())
            );
        }
        board.hand = Board::parse_hand(alphabet, rack[..hand_size].iter().copied())?;
        Ok(board)
    }

    pub fn from_rows<S: AsRef<str>>(
        alphabet: &alphabet::Alphabet<'_>,
        rows: &[S],
        rack: &str,
    ) -> error::Returns<Board> {
        if rows.len() != BOARD_SIZE {
            return_error!(
                Board,
                format!("need {} rows, found {} rows", BOARD_SIZE, rows.len())
            );
        }
        let mut board = Board::empty(Board::parse_hand(alphabet, rack.chars())?);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().chars().collect::<Vec<_>>();
            if row.len() != BOARD_SIZE {
                return_error!(
                    Board,
                    format!(
                        "row {} (0-based): need {} cols, found {} cols",
                        y,
                        BOARD_SIZE,
                        row.len()
                    )
                );
            }
            for (x, &c) in row.iter().enumerate() {
                board.tiles[x][y] = Board::parse_square(alphabet, c)?;
            }
        }
        Ok(board)
    }
}

// Transposed for as long as this lives. Dropping it, including during a
// panic, puts the board back.
pub struct Transposed<'a>(&'a mut Board);

impl<'a> Transposed<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        board.transpose();
        Transposed(board)
    }
}

impl std::ops::Deref for Transposed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.0
    }
}

impl std::ops::DerefMut for Transposed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.0
    }
}

impl Drop for Transposed<'_> {
    fn drop(&mut self) {
        self.0.transpose();
    }
}
