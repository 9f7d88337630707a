//! Perft verification runner.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 5`
//! `cargo run --release --bin perft_runner -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1" --depth 4`

use std::time::Instant;

use tracing_subscriber::EnvFilter;

use rowan_chess::board::board::{Board, STARTING_POSITION_FEN};
use rowan_chess::board::perft::perft;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(value) = args[i + 1].parse::<u8>() {
                return value.max(1);
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str, default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    default.to_owned()
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let depth = parse_arg_u8("--depth", 4);
    let fen = parse_arg_string("--fen", STARTING_POSITION_FEN);

    let mut board = Board::from_fen(&fen).map_err(|e| format!("{e}"))?;
    println!("perft run: fen=\"{fen}\" max_depth={depth}");

    for d in 1..=depth {
        let started = Instant::now();
        let counts = perft(&mut board, d).map_err(|e| format!("{e}"))?;
        let elapsed = started.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            (counts.nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        println!(
            "depth={d} nodes={} captures={} en_passant={} castles={} promotions={} elapsed_ms={} nps={nps}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            elapsed.as_millis(),
        );
    }

    Ok(())
}
