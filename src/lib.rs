// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod board;
pub mod cross_check;
pub mod display;
pub mod movegen;
pub mod moves;
pub mod trie;
