// Copyright (C) 2020-2026 Andy Kurnia.

use allmoves::{alphabet, board, display, error, movegen, trie};
use std::io::Read;

struct Args {
    lexicon_filename: String,
    csv_filename: Option<String>,
    show_board: bool,
}

fn parse_args() -> error::Returns<Args> {
    let mut ret = Args {
        lexicon_filename: "words.txt".into(),
        csv_filename: None,
        show_board: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => match args.next() {
                Some(filename) => ret.csv_filename = Some(filename),
                None => return Err("--csv needs a filename".into()),
            },
            "--show" => ret.show_board = true,
            "--help" => {
                return Err("usage: allmoves [LEXICON] [--csv FILE] [--show] < BOARD".into());
            }
            _ => ret.lexicon_filename = arg,
        }
    }
    Ok(ret)
}

fn main() -> error::Returns<()> {
    let args = parse_args()?;
    let alphabet = &alphabet::ENGLISH_ALPHABET;

    let t0 = std::time::Instant::now();
    // the whole file at once, it is faster than streaming.
    let giant_string = std::fs::read_to_string(&args.lexicon_filename)?;
    let (machine_words, num_skipped) = trie::read_english_machine_words(alphabet, &giant_string);
    drop(giant_string);
    let trie = std::sync::Arc::new(trie::Trie::from_words(&machine_words));
    drop(machine_words);
    let t1 = std::time::Instant::now();
    eprintln!(
        "{:10}ns to build the dictionary from {} ({} words, {} nodes, {} skipped)",
        (t1 - t0).as_nanos(),
        args.lexicon_filename,
        trie.num_words(),
        trie.len(),
        num_skipped
    );

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut board = board::Board::parse(alphabet, &input)?;
    let t2 = std::time::Instant::now();
    eprintln!(
        "{:10}ns to read the board ({} tiles on board, {} in hand)",
        (t2 - t1).as_nanos(),
        board.num_tiles_on_board(),
        board.hand.len()
    );
    if args.show_board {
        display::print_board(alphabet, &board);
    }

    let mut csv_out = match &args.csv_filename {
        Some(filename) => Some(csv::Writer::from_path(filename)?),
        None => None,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .enable_all()
        .build()?;
    let (num_moves, num_branches) = runtime.block_on(async {
        let mut stream = movegen::spawn_search(trie, &mut board);
        let mut num_moves = 0usize;
        while let Some(play) = stream.next().await {
            println!("{}", play.wire(alphabet));
            if args.show_board {
                eprintln!("{}", play.fmt(alphabet, &board));
            }
            if let Some(csv_out) = csv_out.as_mut() {
                let letters = play
                    .word
                    .iter()
                    .map(|&tile| alphabet.from_board(tile).unwrap_or("_"))
                    .collect::<String>();
                csv_out.write_record(&[
                    play.x.to_string(),
                    play.y.to_string(),
                    (if play.down { "down" } else { "across" }).to_string(),
                    play.word.len().to_string(),
                    letters,
                ])?;
            }
            num_moves += 1;
        }
        let num_branches = stream.finish().await?;
        Ok::<_, error::BoxAnyError>((num_moves, num_branches))
    })?;
    if let Some(mut csv_out) = csv_out {
        csv_out.flush()?;
    }
    let t3 = std::time::Instant::now();
    eprintln!(
        "{:10}ns to find {} moves ({} branches)",
        (t3 - t2).as_nanos(),
        num_moves,
        num_branches
    );

    Ok(())
}
