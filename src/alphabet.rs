// Copyright (C) 2020-2026 Andy Kurnia.

// tile numbering follows alphabet order.
// 0 is the blank on a rack, and means empty on a board.
// 0x80 | tile is a blank designated as that tile.

pub const NUM_TILES: usize = 27;

pub struct Tile<'a> {
    label: &'a str,
    blank_label: &'a str,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&'a str> {
        let c = idx & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if idx & 0x80 == 0 {
            Some(self.get(c).label)
        } else {
            Some(self.get(c).blank_label)
        }
    }

    #[inline(always)]
    pub fn from_rack(&self, idx: u8) -> Option<&'a str> {
        if idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    // rack character: '?' is the blank (0), 'A' is 1.
    pub fn rack_tile_of(&self, c: char) -> Option<u8> {
        (0..self.len()).find(|&idx| is_label(self.get(idx).label, c))
    }

    // board character: 'A' is 1, 'a' is a blank designated as A (0x81).
    // never returns 0, since an empty square is not a tile.
    pub fn board_tile_of(&self, c: char) -> Option<u8> {
        (1..self.len()).find_map(|idx| {
            let tile = self.get(idx);
            if is_label(tile.label, c) {
                Some(idx)
            } else if is_label(tile.blank_label, c) {
                Some(idx | 0x80)
            } else {
                None
            }
        })
    }

    // bit t set for every letter t (the blank is not a letter).
    #[inline(always)]
    pub fn letters_bits(&self) -> u64 {
        ((1u64 << self.len()) - 1) & !1
    }
}

#[inline(always)]
fn is_label(label: &str, c: char) -> bool {
    let mut chars = label.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

macro_rules! tile {
    ($label:expr, $blank_label:expr) => {
        Tile {
            label: $label,
            blank_label: $blank_label,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        tile!("?", "?"),
        tile!("A", "a"),
        tile!("B", "b"),
        tile!("C", "c"),
        tile!("D", "d"),
        tile!("E", "e"),
        tile!("F", "f"),
        tile!("G", "g"),
        tile!("H", "h"),
        tile!("I", "i"),
        tile!("J", "j"),
        tile!("K", "k"),
        tile!("L", "l"),
        tile!("M", "m"),
        tile!("N", "n"),
        tile!("O", "o"),
        tile!("P", "p"),
        tile!("Q", "q"),
        tile!("R", "r"),
        tile!("S", "s"),
        tile!("T", "t"),
        tile!("U", "u"),
        tile!("V", "v"),
        tile!("W", "w"),
        tile!("X", "x"),
        tile!("Y", "y"),
        tile!("Z", "z"),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_blank_and_26_letters() {
        assert_eq!(ENGLISH_ALPHABET.len() as usize, NUM_TILES);
        assert_eq!(ENGLISH_ALPHABET.from_rack(0), Some("?"));
        assert_eq!(ENGLISH_ALPHABET.from_rack(26), Some("Z"));
        assert_eq!(ENGLISH_ALPHABET.from_rack(27), None);
    }

    #[test]
    fn board_labels_mark_blanks() {
        assert_eq!(ENGLISH_ALPHABET.from_board(0), None);
        assert_eq!(ENGLISH_ALPHABET.from_board(3), Some("C"));
        assert_eq!(ENGLISH_ALPHABET.from_board(0x83), Some("c"));
    }

    #[test]
    fn characters_map_to_tiles() {
        assert_eq!(ENGLISH_ALPHABET.rack_tile_of('?'), Some(0));
        assert_eq!(ENGLISH_ALPHABET.rack_tile_of('A'), Some(1));
        assert_eq!(ENGLISH_ALPHABET.rack_tile_of('a'), None);
        assert_eq!(ENGLISH_ALPHABET.board_tile_of('S'), Some(19));
        assert_eq!(ENGLISH_ALPHABET.board_tile_of('s'), Some(0x80 | 19));
        assert_eq!(ENGLISH_ALPHABET.board_tile_of('?'), None);
        assert_eq!(ENGLISH_ALPHABET.board_tile_of(' '), None);
    }

    #[test]
    fn letters_bits_excludes_blank() {
        let bits = ENGLISH_ALPHABET.letters_bits();
        assert_eq!(bits & 1, 0);
        assert_eq!(bits.count_ones(), 26);
        assert_ne!(bits & (1 << 26), 0);
    }
}
