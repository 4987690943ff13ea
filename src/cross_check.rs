// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, trie};
use board::{BOARD_SIZE, CENTER};

const ANCHOR: u8 = 1;
const END: u8 = 2;
const STATIC: u8 = 4;

// Which letters may go on a square, seen from one orientation.
// bits has bit t set if tile t is allowed. A static square only allows the
// tile already there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrossCheck {
    bits: u64,
    flags: u8,
}

impl CrossCheck {
    #[inline(always)]
    pub fn fixed(tile: u8) -> CrossCheck {
        CrossCheck {
            bits: 1 << (tile & 0x7f),
            flags: ANCHOR | STATIC,
        }
    }

    #[inline(always)]
    pub fn free(bits: u64) -> CrossCheck {
        CrossCheck { bits, flags: END }
    }

    #[inline(always)]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    #[inline(always)]
    pub fn allows(&self, tile: u8) -> bool {
        self.bits & (1 << tile) != 0
    }

    #[inline(always)]
    pub fn is_anchor(&self) -> bool {
        self.flags & ANCHOR != 0
    }

    // a word may stop right before this square.
    #[inline(always)]
    pub fn can_end(&self) -> bool {
        self.flags & END != 0
    }

    #[inline(always)]
    pub fn is_static(&self) -> bool {
        self.flags & STATIC != 0
    }
}

pub type CrossChecks = [[CrossCheck; BOARD_SIZE]; BOARD_SIZE];

// cross_checks[a][b] is for board.tiles[a][b]. The perpendicular word runs
// through tiles[a - 1][b] and tiles[a + 1][b], so these are the cross-checks
// for plays along tiles[a].
pub fn gen_cross_checks(
    alphabet: &alphabet::Alphabet<'_>,
    trie: &trie::Trie,
    board: &board::Board,
) -> Box<CrossChecks> {
    let mut cross_checks = Box::new([[CrossCheck::default(); BOARD_SIZE]; BOARD_SIZE]);
    let candidates = board.hand.candidates(alphabet);
    let mut word_buffer = [0u8; BOARD_SIZE];
    for a in 0..BOARD_SIZE {
        for b in 0..BOARD_SIZE {
            let tile = board.tiles[a][b];
            if tile != 0 {
                cross_checks[a][b] = CrossCheck::fixed(tile);
                continue;
            }
            let ai = a as isize;
            let bi = b as isize;
            if board.at_signed(ai - 1, bi) == 0 && board.at_signed(ai + 1, bi) == 0 {
                // free floating
                cross_checks[a][b] = CrossCheck::free(candidates);
                continue;
            }
            let mut start = a;
            while start > 0 && board.tiles[start - 1][b] != 0 {
                start -= 1;
            }
            let mut len = 0;
            while start + len < BOARD_SIZE && (start + len == a || board.tiles[start + len][b] != 0) {
                word_buffer[len] = board.tiles[start + len][b] & 0x7f;
                len += 1;
            }
            let mut bits = 0u64;
            let mut remaining = candidates;
            while remaining != 0 {
                let letter = remaining.trailing_zeros() as u8;
                remaining &= remaining - 1;
                word_buffer[a - start] = letter;
                if trie.verify(&word_buffer[..len]) {
                    bits |= 1 << letter;
                }
            }
            cross_checks[a][b] = CrossCheck {
                bits,
                flags: ANCHOR | END,
            };
        }
    }
    // every game starts through the center
    cross_checks[CENTER][CENTER].flags |= ANCHOR;
    cross_checks
}

// (for down plays, for across plays).
// down[x][y] and across[y][x] are both about board.tiles[x][y].
pub fn gen_lane_cross_checks(
    alphabet: &alphabet::Alphabet<'_>,
    trie: &trie::Trie,
    board: &mut board::Board,
) -> (Box<CrossChecks>, Box<CrossChecks>) {
    let down = gen_cross_checks(alphabet, trie, board);
    let across = gen_cross_checks(alphabet, trie, &board::Transposed::new(board));
    (down, across)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::board::{Board, Hand};
    use rand::prelude::*;

    fn tiles(s: &str) -> Vec<u8> {
        s.chars()
            .map(|c| ENGLISH_ALPHABET.board_tile_of(c).unwrap())
            .collect()
    }

    fn trie_of(words: &[&str]) -> trie::Trie {
        trie::Trie::from_words(words.iter().map(|w| tiles(w)))
    }

    fn hand_of(rack: &str) -> Hand {
        Hand::from_rack(
            &rack
                .chars()
                .map(|c| ENGLISH_ALPHABET.rack_tile_of(c).unwrap())
                .collect::<Vec<_>>(),
        )
    }

    fn bits_of(letters: &str) -> u64 {
        tiles(letters).iter().fold(0, |bits, &t| bits | (1 << t))
    }

    #[test]
    fn empty_board_is_free_floating() {
        let trie = trie_of(&["CAB"]);
        let mut board = Board::empty(hand_of("ABC"));
        let (down, across) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        for cross_checks in [&down, &across] {
            for a in 0..BOARD_SIZE {
                for b in 0..BOARD_SIZE {
                    let cc = cross_checks[a][b];
                    assert_eq!(cc.bits(), bits_of("ABC"));
                    assert!(cc.can_end());
                    assert!(!cc.is_static());
                    assert_eq!(cc.is_anchor(), a == CENTER && b == CENTER);
                }
            }
        }
    }

    #[test]
    fn center_is_always_an_anchor() {
        let trie = trie_of(&["AB", "BA"]);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(77);
        for _ in 0..20 {
            let mut board = Board::empty(hand_of("AB?"));
            for x in 0..BOARD_SIZE {
                for y in 0..BOARD_SIZE {
                    if rng.random_bool(0.2) {
                        board.tiles[x][y] = rng.random_range(1..3u8);
                    }
                }
            }
            let (down, across) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
            assert!(down[CENTER][CENTER].is_anchor());
            assert!(across[CENTER][CENTER].is_anchor());
        }
    }

    #[test]
    fn static_squares_only_allow_their_tile() {
        let trie = trie_of(&["CAT", "AT", "TA"]);
        let mut board = Board::empty(hand_of("ACT?"));
        board.place(&ENGLISH_ALPHABET, 7, 7, false, "CAt").unwrap();
        let (down, across) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        for (x, letter) in [(7, "C"), (8, "A"), (9, "T")] {
            for cc in [down[x][7], across[7][x]] {
                assert!(cc.is_static());
                assert!(cc.is_anchor());
                assert!(!cc.can_end());
                assert_eq!(cc.bits(), bits_of(letter));
            }
        }
    }

    #[test]
    fn perpendicular_words_restrict_letters() {
        // A at (7,7). For down plays the perpendicular word is horizontal.
        let trie = trie_of(&["AT", "TA", "ATE"]);
        let mut board = Board::empty(hand_of("TE"));
        board.place(&ENGLISH_ALPHABET, 7, 7, false, "A").unwrap();
        let (down, across) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);

        // right of A: AT ok, AE no.
        assert_eq!(down[8][7].bits(), bits_of("T"));
        assert!(down[8][7].is_anchor());
        assert!(down[8][7].can_end());
        // left of A: TA ok.
        assert_eq!(down[6][7].bits(), bits_of("T"));
        // below A, across plays see the vertical word: AT.
        assert_eq!(across[8][7].bits(), bits_of("T"));
        assert_eq!(across[6][7].bits(), bits_of("T"));
        // diagonal neighbours are untouched.
        assert_eq!(down[8][8].bits(), bits_of("ET"));
        assert!(!down[8][8].is_anchor());
    }

    #[test]
    fn runs_on_both_sides_are_joined() {
        // C A _ E with the gap at x = 9.
        let trie = trie_of(&["CATE", "CARE"]);
        let mut board = Board::empty(hand_of("RTX"));
        board.place(&ENGLISH_ALPHABET, 7, 3, false, "CA").unwrap();
        board.place(&ENGLISH_ALPHABET, 10, 3, false, "E").unwrap();
        let (down, _) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        assert_eq!(down[9][3].bits(), bits_of("RT"));
        assert!(down[9][3].is_anchor());
    }

    #[test]
    fn runs_at_the_edges_are_found() {
        let trie = trie_of(&["QI", "XI", "IO"]);
        let mut board = Board::empty(hand_of("QXO"));
        // I at the left and right edges of row 4, and at the top and bottom of column 2.
        board.place(&ENGLISH_ALPHABET, 0, 4, false, "I").unwrap();
        board.place(&ENGLISH_ALPHABET, 14, 4, false, "I").unwrap();
        board.place(&ENGLISH_ALPHABET, 2, 0, false, "I").unwrap();
        board.place(&ENGLISH_ALPHABET, 2, 14, false, "I").unwrap();
        let (down, across) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        // I_ reads IO, _I reads QI or XI.
        assert_eq!(down[1][4].bits(), bits_of("O"));
        assert_eq!(down[13][4].bits(), bits_of("QX"));
        assert_eq!(across[1][2].bits(), bits_of("O"));
        assert_eq!(across[13][2].bits(), bits_of("QX"));
    }

    #[test]
    fn blank_in_hand_tries_every_letter() {
        let trie = trie_of(&["ZA", "ZO"]);
        let mut board = Board::empty(hand_of("?"));
        board.place(&ENGLISH_ALPHABET, 4, 4, false, "Z").unwrap();
        let (down, _) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        assert_eq!(down[5][4].bits(), bits_of("AO"));
        assert_eq!(down[0][0].bits().count_ones(), 26);
    }

    #[test]
    fn blank_on_board_reads_as_its_letter() {
        let trie = trie_of(&["ZA"]);
        let mut board = Board::empty(hand_of("A"));
        board.place(&ENGLISH_ALPHABET, 4, 4, false, "z").unwrap();
        let (down, _) = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        assert_eq!(down[4][4].bits(), bits_of("Z"));
        assert_eq!(down[5][4].bits(), bits_of("A"));
    }

    #[test]
    fn board_is_restored() {
        let trie = trie_of(&["AB"]);
        let mut board = Board::empty(hand_of("AB"));
        board.place(&ENGLISH_ALPHABET, 2, 9, true, "ABBA").unwrap();
        let original = board.clone();
        let _ = gen_lane_cross_checks(&ENGLISH_ALPHABET, &trie, &mut board);
        assert_eq!(board, original);
    }
}
