// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;

// Node 0 is the root. Index 0 also means "none" for child and sibling links,
// which is unambiguous because the root is nobody's child or sibling.
#[derive(Clone)]
struct Node {
    tile: u8,
    accepts: bool,
    parent: u32,
    first_child: u32,
    next_sibling: u32,
}

pub struct Trie {
    nodes: Vec<Node>,
    num_words: u32,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node {
                tile: 0, // unused for the root
                accepts: false,
                parent: 0,
                first_child: 0,
                next_sibling: 0,
            }],
            num_words: 0,
        }
    }

    pub fn from_words<I: IntoIterator<Item = W>, W: AsRef<[u8]>>(words: I) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    // number of nodes, including the root.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    #[inline(always)]
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    // children are kept sorted by tile.
    fn child_or_insert(&mut self, p: u32, tile: u8) -> u32 {
        let mut prev = 0;
        let mut q = self.nodes[p as usize].first_child;
        while q != 0 {
            let node = &self.nodes[q as usize];
            if node.tile == tile {
                return q;
            }
            if node.tile > tile {
                break;
            }
            prev = q;
            q = node.next_sibling;
        }
        let new_index = self.nodes.len() as u32;
        self.nodes.push(Node {
            tile,
            accepts: false,
            parent: p,
            first_child: 0,
            next_sibling: q,
        });
        if prev == 0 {
            self.nodes[p as usize].first_child = new_index;
        } else {
            self.nodes[prev as usize].next_sibling = new_index;
        }
        new_index
    }

    // words must be spelled with letters 1..NUM_TILES. anything else,
    // including the empty word, is ignored.
    pub fn insert(&mut self, word: &[u8]) {
        if word.is_empty()
            || word
                .iter()
                .any(|&tile| tile == 0 || tile as usize >= alphabet::NUM_TILES)
        {
            return;
        }
        let mut p = 0;
        for &tile in word {
            p = self.child_or_insert(p, tile);
        }
        let node = &mut self.nodes[p as usize];
        if !node.accepts {
            node.accepts = true;
            self.num_words += 1;
        }
    }

    // -1 if p has no child for tile (or p itself is -1).
    #[inline(always)]
    pub fn seek(&self, p: i32, tile: u8) -> i32 {
        if p >= 0 {
            let mut q = self.nodes[p as usize].first_child;
            while q != 0 {
                let node = &self.nodes[q as usize];
                if node.tile == tile {
                    return q as i32;
                }
                if node.tile > tile {
                    break;
                }
                q = node.next_sibling;
            }
        }
        -1
    }

    pub fn verify(&self, word: &[u8]) -> bool {
        let mut p = 0;
        for &tile in word {
            p = self.seek(p, tile);
            if p < 0 {
                return false;
            }
        }
        self.accepts(p)
    }

    #[inline(always)]
    pub fn accepts(&self, p: i32) -> bool {
        self.nodes[p as usize].accepts
    }

    #[inline(always)]
    pub fn tile(&self, p: i32) -> u8 {
        self.nodes[p as usize].tile
    }

    #[inline(always)]
    pub fn children(&self, p: i32) -> Children<'_> {
        Children {
            trie: self,
            q: self.nodes[p as usize].first_child,
        }
    }

    // walks parent links, so the result is the path from the root to p.
    pub fn word_at(&self, mut p: i32) -> Vec<u8> {
        let mut word = Vec::new();
        while p > 0 {
            let node = &self.nodes[p as usize];
            word.push(node.tile);
            p = node.parent as i32;
        }
        word.reverse();
        word
    }
}

pub struct Children<'a> {
    trie: &'a Trie,
    q: u32,
}

impl Iterator for Children<'_> {
    type Item = (u8, i32);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.q == 0 {
            return None;
        }
        let p = self.q;
        let node = &self.trie.nodes[p as usize];
        self.q = node.next_sibling;
        Some((node.tile, p as i32))
    }
}

// Returns the words and the number of lines that were skipped as malformed.
// Blank lines are not counted as malformed.
pub fn read_english_machine_words(
    alphabet: &alphabet::Alphabet<'_>,
    giant_string: &str,
) -> (Vec<Box<[u8]>>, usize) {
    let mut machine_words = Vec::new();
    let mut num_skipped = 0;
    'line: for s in giant_string.lines() {
        let s = s.trim_end();
        if s.is_empty() {
            continue;
        }
        let mut v = Vec::with_capacity(s.len());
        for c in s.chars() {
            match alphabet.board_tile_of(c.to_ascii_uppercase()) {
                Some(tile) if tile & 0x80 == 0 => v.push(tile),
                _ => {
                    num_skipped += 1;
                    continue 'line;
                }
            }
        }
        machine_words.push(v.into_boxed_slice());
    }
    (machine_words, num_skipped)
}
