// Copyright (C) 2020-2026 Andy Kurnia. All rights reserved.

use allmoves::{alphabet, board, error, movegen, return_error, trie};
use std::io::Read;

// lexicon: path to a word list, one word per line.
// rack: eg "AEINST?" where ? is a blank.
// board: 15 strings of 15 characters, space for empty, lowercase for blanks.
#[derive(serde::Deserialize)]
struct Question {
    lexicon: String,
    rack: String,
    #[serde(rename = "board")]
    board_rows: Vec<String>,
}

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let data = if args.len() > 1 {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut data = String::new();
        std::io::stdin().read_to_string(&mut data)?;
        data
    };
    let question = match serde_json::from_str::<Question>(&data) {
        Ok(question) => question,
        Err(err) => {
            return_error!(Question, format!("cannot parse: {}", err));
        }
    };

    let alphabet = &alphabet::ENGLISH_ALPHABET;
    let t0 = std::time::Instant::now();
    let (machine_words, num_skipped) =
        trie::read_english_machine_words(alphabet, &std::fs::read_to_string(&question.lexicon)?);
    if machine_words.is_empty() {
        return_error!(Lexicon, format!("no words in {:?}", question.lexicon));
    }
    let trie = std::sync::Arc::new(trie::Trie::from_words(&machine_words));
    let mut board = board::Board::from_rows(alphabet, &question.board_rows, &question.rack)?;
    let t1 = std::time::Instant::now();
    eprintln!(
        "{:10}ns to read the question ({} words, {} skipped)",
        (t1 - t0).as_nanos(),
        trie.num_words(),
        num_skipped
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .enable_all()
        .build()?;
    let mut plays = runtime.block_on(movegen::find_all_moves(trie, &mut board))?;
    // the search has no order of its own.
    plays.sort_unstable();
    let t2 = std::time::Instant::now();
    eprintln!(
        "{:10}ns to find {} moves",
        (t2 - t1).as_nanos(),
        plays.len()
    );

    // x, y: origin (0-based), x is the column.
    // word: the whole word, with tiles already on the board as "_".
    // played: the tiles taken from the rack, "?" for blanks.
    let mut result = Vec::<serde_json::Value>::with_capacity(plays.len());
    for play in plays.iter() {
        let word = play
            .word
            .iter()
            .map(|&tile| alphabet.from_board(tile).unwrap_or("_"))
            .collect::<String>();
        let played = play
            .played_tiles()
            .map(|tile| alphabet.from_rack(tile).unwrap_or("?"))
            .collect::<String>();
        result.push(serde_json::json!({
            "x": play.x,
            "y": play.y,
            "down": play.down,
            "word": word,
            "played": played }));
    }
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
