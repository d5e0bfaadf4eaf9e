use anyhow::{Context, Result, bail};
use botetourt_core::{Board, Square};
use tracing::info;

/// Split a coordinate move such as `b2b4` into its two squares.
fn parse_move(text: &str) -> Result<(Square, Square)> {
    if text.len() != 4 || !text.is_ascii() {
        bail!("expected a move like b2b4, got \"{text}\"");
    }
    let (from, to) = text.split_at(2);
    let from = Square::from_algebraic(from).with_context(|| format!("bad origin in \"{text}\""))?;
    let to = Square::from_algebraic(to).with_context(|| format!("bad destination in \"{text}\""))?;
    Ok((from, to))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("botetourt starting");

    let mut board = Board::with_setup();
    for arg in std::env::args().skip(1) {
        let (from, to) = parse_move(&arg)?;
        board
            .move_piece(from, to)
            .with_context(|| format!("cannot play {arg}"))?;
        info!(from = %from, to = %to, "applied move");
    }

    println!("{}", board.pretty());
    Ok(())
}
