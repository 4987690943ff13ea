// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, cross_check, error, moves, trie};
use board::BOARD_SIZE;
use std::sync::Arc;
use tokio::sync::mpsc;

// Everything the branches share. Read-only once the search starts, except
// for the two channels.
struct SearchEnv {
    trie: Arc<trie::Trie>,
    board_tiles: [[u8; BOARD_SIZE]; BOARD_SIZE],
    cross_checks_for_down_plays: Box<cross_check::CrossChecks>,
    cross_checks_for_across_plays: Box<cross_check::CrossChecks>,
    found_moves: mpsc::UnboundedSender<moves::Move>,
    tally: mpsc::UnboundedSender<i64>,
}

impl SearchEnv {
    // lane is the column for down plays and the row for across plays.
    #[inline(always)]
    fn tile_at(&self, down: bool, lane: u8, idx: usize) -> u8 {
        if down {
            self.board_tiles[lane as usize][idx]
        } else {
            self.board_tiles[idx][lane as usize]
        }
    }

    #[inline(always)]
    fn cross_check(&self, down: bool, lane: u8, idx: usize) -> cross_check::CrossCheck {
        if down {
            self.cross_checks_for_down_plays[lane as usize][idx]
        } else {
            self.cross_checks_for_across_plays[lane as usize][idx]
        }
    }

    // a word cannot begin right after a tile, or a suffix of a word already
    // on the board would be reported as a word of its own.
    #[inline(always)]
    fn can_start(&self, down: bool, lane: u8, idx: usize) -> bool {
        idx == 0 || self.tile_at(down, lane, idx - 1) == 0
    }

    fn record(&self, branch: &Branch) {
        let start = branch.start as usize;
        let word = self
            .trie
            .word_at(branch.p)
            .into_iter()
            .enumerate()
            .map(|(i, tile)| {
                if self.tile_at(branch.down, branch.lane, start + i) != 0 {
                    0
                } else if branch.blanks & (1 << (start + i)) != 0 {
                    tile | 0x80
                } else {
                    tile
                }
            })
            .collect();
        let (x, y) = if branch.down {
            (branch.lane, branch.start)
        } else {
            (branch.start, branch.lane)
        };
        // the receiver may have been dropped by an uninterested consumer.
        let _ = self.found_moves.send(moves::Move {
            x,
            y,
            down: branch.down,
            word,
        });
    }
}

#[derive(Clone, Copy)]
struct Branch {
    down: bool,
    lane: u8,
    start: u8,
    idx: u8,             // next square to fill
    p: i32,              // trie node for the tiles so far
    hand: board::Hand,   // what is left after this branch's tiles
    anchored: bool,      // some covered square is an anchor
    num_played: u8,      // tiles taken from the hand
    blanks: u16,         // bit i set if square i got a blank
}

// Sends the -1 for exactly one +1, whether the branch ran, panicked, or was
// dropped unstarted.
struct Done(mpsc::UnboundedSender<i64>);

impl Drop for Done {
    fn drop(&mut self) {
        let _ = self.0.send(-1);
    }
}

fn spawn_branch(env: &Arc<SearchEnv>, branch: Branch) {
    let _ = env.tally.send(1);
    let done = Done(env.tally.clone());
    let env = Arc::clone(env);
    tokio::spawn(async move {
        explore(&env, &branch);
        // release the result sender before reporting completion, so the
        // monitor holds the last one when the count reaches zero.
        drop(env);
        drop(done);
    });
}

fn explore(env: &Arc<SearchEnv>, branch: &Branch) {
    let idx = branch.idx as usize;
    let mut can_end = true;
    if idx < BOARD_SIZE {
        let this_cross_check = env.cross_check(branch.down, branch.lane, idx);
        let next = Branch {
            idx: branch.idx + 1,
            // only squares the word covers count, not the one after it.
            anchored: branch.anchored || this_cross_check.is_anchor(),
            ..*branch
        };
        for (tile, q) in env.trie.children(branch.p) {
            if !this_cross_check.allows(tile) {
                continue;
            }
            if this_cross_check.is_static() {
                spawn_branch(env, Branch { p: q, ..next });
                continue;
            }
            if branch.hand.count(tile) > 0 {
                spawn_branch(
                    env,
                    Branch {
                        p: q,
                        hand: branch.hand.take(tile),
                        num_played: branch.num_played + 1,
                        ..next
                    },
                );
            }
            if branch.hand.count(0) > 0 {
                spawn_branch(
                    env,
                    Branch {
                        p: q,
                        hand: branch.hand.take(0),
                        num_played: branch.num_played + 1,
                        blanks: branch.blanks | (1 << idx),
                        ..next
                    },
                );
            }
        }
        can_end = this_cross_check.can_end();
    }
    if can_end && branch.anchored && branch.num_played > 0 && env.trie.accepts(branch.p) {
        env.record(branch);
    }
}

// Sums launches and completions. Zero means every branch and all of its
// descendants are done; dropping found_moves then closes the stream.
async fn monitor(
    mut tally: mpsc::UnboundedReceiver<i64>,
    found_moves: mpsc::UnboundedSender<moves::Move>,
) -> u64 {
    let mut outstanding = 0i64;
    let mut num_launched = 0u64;
    while let Some(delta) = tally.recv().await {
        if delta > 0 {
            num_launched += delta as u64;
        }
        outstanding += delta;
        if outstanding == 0 {
            break;
        }
    }
    drop(found_moves);
    num_launched - 1 // the driver's own unit
}

pub struct MoveStream {
    found_moves: mpsc::UnboundedReceiver<moves::Move>,
    monitor: tokio::task::JoinHandle<u64>,
}

impl MoveStream {
    // None once the search is exhausted. No particular order.
    pub async fn next(&mut self) -> Option<moves::Move> {
        self.found_moves.recv().await
    }

    // number of branches explored.
    pub async fn finish(self) -> error::Returns<u64> {
        drop(self.found_moves);
        Ok(self.monitor.await?)
    }
}

// Must be called from within a tokio runtime. The board is transposed and
// restored while the cross-checks are computed; the search itself works on a
// copy, so the board is free again when this returns.
pub fn spawn_search(trie: Arc<trie::Trie>, board: &mut board::Board) -> MoveStream {
    let (cross_checks_for_down_plays, cross_checks_for_across_plays) =
        cross_check::gen_lane_cross_checks(&alphabet::ENGLISH_ALPHABET, &trie, board);
    let (found_moves_tx, found_moves_rx) = mpsc::unbounded_channel();
    let (tally_tx, tally_rx) = mpsc::unbounded_channel();

    // hold one unit so seeding cannot be mistaken for completion.
    let _ = tally_tx.send(1);
    let driver = Done(tally_tx.clone());
    let monitor = tokio::spawn(monitor(tally_rx, found_moves_tx.clone()));

    let env = Arc::new(SearchEnv {
        trie,
        board_tiles: board.tiles,
        cross_checks_for_down_plays,
        cross_checks_for_across_plays,
        found_moves: found_moves_tx,
        tally: tally_tx,
    });
    for lane in 0..BOARD_SIZE as u8 {
        for start in 0..BOARD_SIZE as u8 {
            for down in [true, false] {
                if env.can_start(down, lane, start as usize) {
                    spawn_branch(
                        &env,
                        Branch {
                            down,
                            lane,
                            start,
                            idx: start,
                            p: 0,
                            hand: board.hand,
                            anchored: false,
                            num_played: 0,
                            blanks: 0,
                        },
                    );
                }
            }
        }
    }
    drop(env);
    drop(driver);

    MoveStream {
        found_moves: found_moves_rx,
        monitor,
    }
}

pub async fn find_all_moves(
    trie: Arc<trie::Trie>,
    board: &mut board::Board,
) -> error::Returns<Vec<moves::Move>> {
    let mut stream = spawn_search(trie, board);
    let mut found = Vec::new();
    while let Some(play) = stream.next().await {
        found.push(play);
    }
    stream.finish().await?;
    Ok(found)
}
