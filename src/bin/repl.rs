use bfrpg_dice::{Evaluator, Limits, MarkdownStringifier, RollError, RollResult};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roll dice notation such as 3d6, 1d20+5 or 4d6L", long_about = None)]
struct Cli {
    /// Notations to roll; reads one per line from stdin when omitted
    notations: Vec<String>,

    /// Render breakdowns as Markdown
    #[arg(short, long)]
    markdown: bool,

    /// Largest dice count a notation may request
    #[arg(long, default_value_t = Limits::DEFAULT_MAX_DICE)]
    max_dice: u32,

    /// Ceiling on dice rolled per notation, explosions included
    #[arg(long, default_value_t = Limits::DEFAULT_MAX_ROLLS)]
    max_rolls: usize,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
}

struct Session {
    evaluator: Evaluator,
    rng: StdRng,
    markdown: bool,
}

impl Session {
    fn new(cli: &Cli) -> Self {
        let limits = Limits::new(cli.max_dice, cli.max_rolls);
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            evaluator: Evaluator::new(limits),
            rng,
            markdown: cli.markdown,
        }
    }

    fn roll(&mut self, notation: &str) -> Result<String, RollError> {
        let result: RollResult = self.evaluator.roll_with(notation, &mut self.rng)?;
        Ok(if self.markdown {
            result.stringify(&mut MarkdownStringifier::new())
        } else {
            result.to_string()
        })
    }

    /// Prints the result or the error; returns whether the roll succeeded.
    fn report(&mut self, notation: &str) -> bool {
        match self.roll(notation) {
            Ok(r) => {
                println!("{}", r);
                true
            }
            Err(why) => {
                eprintln!("Error: {}", why);
                false
            }
        }
    }
}

fn interactive(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        let line = line?;
        let notation = line.trim();
        if matches!(notation, "quit" | "exit") {
            break;
        }
        if !notation.is_empty() {
            session.report(notation);
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(&cli);
    debug!(limits = ?session.evaluator.limits(), seeded = cli.seed.is_some(), "session started");

    if cli.notations.is_empty() {
        interactive(&mut session)?;
        return Ok(());
    }

    let mut ok = true;
    for notation in &cli.notations {
        ok &= session.report(notation);
    }
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
