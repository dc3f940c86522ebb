use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use checkerboard::cli::BoardArgs;
use checkerboard::{Board, BoardError, RecordingSurface, Team};
use clap::Parser;

/// A pointer position in board pixels, written `X,Y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Click {
    x: i64,
    y: i64,
}

impl FromStr for Click {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected X,Y but got {s:?}"))?;
        Ok(Self {
            x: x.trim().parse().with_context(|| format!("bad x in {s:?}"))?,
            y: y.trim().parse().with_context(|| format!("bad y in {s:?}"))?,
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "main", about = "Prints the checkerboard and replays clicks on it")]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,

    /// Pointer click in board pixels; may be repeated.
    #[arg(long = "click", value_name = "X,Y")]
    clicks: Vec<Click>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.board.init_logging().context("failed to set up logging")?;

    let mut board = Board::new(cli.board.config())?;
    println!(
        "{n}x{n} board, {} px, {} px cells",
        board.size(),
        board.cell_length(),
        n = board.grid_size()
    );
    print!("{}", render_ascii(&board));

    let mut surface = RecordingSurface::default();
    for click in cli.clicks {
        surface.clear();
        match board.handle_click(click.x, click.y, &mut surface) {
            Ok(outcome) => {
                let highlighted = surface
                    .rects()
                    .filter(|(_, color)| *color == board.palette().highlight)
                    .count();
                println!(
                    "({}, {}) -> {}: {} draw commands, {} highlighted",
                    click.x,
                    click.y,
                    outcome.cell,
                    surface.commands().len(),
                    highlighted
                );
            }
            Err(err @ BoardError::CellOutOfRange { .. }) => {
                println!("({}, {}) -> ignored: {err}", click.x, click.y);
            }
            Err(err) => bail!("board invariant violated: {err}"),
        }
    }

    Ok(())
}

/// One line per row: `.` light, `_` dark, `b`/`r` for top/bottom pieces.
fn render_ascii(board: &Board) -> String {
    let n = i64::from(board.grid_size());
    let mut out = String::new();
    for row in 0..n {
        for col in 0..n {
            let ch = match board.find_piece(col, row).map(|p| p.team()) {
                Some(Team::Top) => 'b',
                Some(Team::Bottom) => 'r',
                None if (row + col) % 2 == 1 => '_',
                None => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
