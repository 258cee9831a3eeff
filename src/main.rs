//! Klondike engine - text-mode harness
//!
//! A development stand-in for the real presentation layer: reads commands
//! from stdin, turns them into engine intents, and prints the table view
//! returned with every reply.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use klondike_engine::core::Card;
use klondike_engine::game::{
    DrawMode, Engine, EventLog, Intent, MoveSource, Outcome, VerbosityLevel,
};
use std::io::{self, BufRead, Write};

/// Draw mode selector (CLI-facing names)
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DrawModeArg {
    /// Draw one card per stock click
    Single,
    /// Draw three cards per stock click
    Triple,
}

impl From<DrawModeArg> for DrawMode {
    fn from(arg: DrawModeArg) -> Self {
        match arg {
            DrawModeArg::Single => DrawMode::Single,
            DrawModeArg::Triple => DrawMode::Triple,
        }
    }
}

/// Verbosity level (accepts names or numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "klondike")]
#[command(about = "Klondike Solitaire - game-state engine harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play over stdin
    Play {
        /// Draw mode
        #[arg(long, value_enum, default_value = "single")]
        draw_mode: DrawModeArg,

        /// Set the shuffle seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,

        /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, short = 'v', default_value = "normal")]
        verbosity: VerbosityArg,
    },

    /// Deal an opening table, print it, and exit
    Deal {
        /// Draw mode
        #[arg(long, value_enum, default_value = "single")]
        draw_mode: DrawModeArg,

        /// Set the shuffle seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the table view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            draw_mode,
            seed,
            verbosity,
        } => play(draw_mode.into(), seed, verbosity.0),
        Commands::Deal {
            draw_mode,
            seed,
            json,
        } => deal(draw_mode.into(), seed, json),
    }
}

fn deal(draw_mode: DrawMode, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let engine = Engine::new(draw_mode, seed, EventLog::new(VerbosityLevel::Silent))
        .context("dealing opening table")?;
    let table = engine.table();
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{table}");
    }
    Ok(())
}

const HELP: &str = "\
commands:
  d               draw from stock
  r               recycle waste into stock
  m w <dst>       move waste top onto tableau pile <dst> (1-7)
  m <src> <dst> [n]  move the top n cards of pile <src> onto <dst>
                  (default: the whole face-up run)
  a w | a <pile>  auto-move the waste/pile top to a foundation
  u               undo
  n               new game
  mode 1|3        switch draw mode (re-deals)
  p               print the table
  q               quit";

fn play(draw_mode: DrawMode, seed: Option<u64>, verbosity: VerbosityLevel) -> anyhow::Result<()> {
    let mut engine = Engine::new(draw_mode, seed, EventLog::new(verbosity))
        .context("dealing opening table")?;
    println!("{}", engine.table());
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() || words == ["p"] || words == ["print"] {
            println!("{}", engine.table());
            continue;
        }
        let intent = match parse_command(&engine, &words) {
            Ok(Some(intent)) => intent,
            Ok(None) => break,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let reply = engine.apply(intent)?;
        if let Outcome::Rejected(rejection) = reply.outcome {
            println!("move rejected: {rejection:?}");
        }
        println!("{}", reply.table);
        if reply.table.is_won() {
            println!("all foundations complete - you won!");
        }
    }
    Ok(())
}

/// Translate a command line into an intent. `Ok(None)` means quit.
fn parse_command(engine: &Engine, words: &[&str]) -> anyhow::Result<Option<Intent>> {
    let intent = match words {
        ["q"] | ["quit"] | ["exit"] => return Ok(None),
        ["d"] | ["draw"] => Intent::DrawFromStock,
        ["r"] | ["recycle"] => Intent::RecycleWaste,
        ["u"] | ["undo"] => Intent::Undo,
        ["n"] | ["new"] => Intent::NewGame,
        ["mode", "1"] => Intent::SetDrawMode(DrawMode::Single),
        ["mode", "3"] => Intent::SetDrawMode(DrawMode::Triple),
        ["m", "w", dst] => Intent::MoveSequence {
            source: MoveSource::Waste,
            target: parse_pile(dst)?,
        },
        ["m", src, dst] => {
            let pile = parse_pile(src)?;
            move_whole_run(engine, pile, parse_pile(dst)?)?
        }
        ["m", src, dst, n] => {
            let pile = parse_pile(src)?;
            let count: usize = n.parse().context("card count")?;
            let len = engine.state().tableau[pile].len();
            if count == 0 || count > len {
                bail!("pile {} has {} cards", pile + 1, len);
            }
            Intent::MoveSequence {
                source: MoveSource::Tableau {
                    pile,
                    index: len - count,
                },
                target: parse_pile(dst)?,
            }
        }
        ["a", "w"] => Intent::AutoMoveToFoundation {
            card: top_card(engine.state().waste.top(), "waste")?,
        },
        ["a", pile] => {
            let pile = parse_pile(pile)?;
            Intent::AutoMoveToFoundation {
                card: top_card(engine.state().tableau[pile].top(), "pile")?,
            }
        }
        ["h"] | ["help"] | ["?"] => {
            bail!("{HELP}");
        }
        _ => bail!("unrecognized command (h for help)"),
    };
    Ok(Some(intent))
}

/// The whole face-up run of a pile, as a move source.
fn move_whole_run(engine: &Engine, pile: usize, target: usize) -> anyhow::Result<Intent> {
    let cards = &engine.state().tableau[pile].cards;
    let index = cards
        .iter()
        .position(|c| c.face_up)
        .with_context(|| format!("pile {} has no face-up cards", pile + 1))?;
    Ok(Intent::MoveSequence {
        source: MoveSource::Tableau { pile, index },
        target,
    })
}

fn parse_pile(s: &str) -> anyhow::Result<usize> {
    let n: usize = s.parse().with_context(|| format!("bad pile number '{s}'"))?;
    if !(1..=7).contains(&n) {
        bail!("pile number must be 1-7");
    }
    Ok(n - 1)
}

fn top_card(top: Option<&Card>, what: &str) -> anyhow::Result<Card> {
    top.copied().with_context(|| format!("{what} is empty"))
}
