use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use entrocheck::entropy::{Verdict, shannon_entropy};
use entrocheck::histogram::{Histogram, read_counts};

/// Command line arguments for entrocheck.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Counts file to read, one integer per line (standard input if omitted)
    input: Option<PathBuf>,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    entrocheck::logging::init(args.verbose);

    if let Err(err) = run(&args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let raw = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_counts(BufReader::new(file))?
        }
        None => read_counts(io::stdin().lock())?,
    };

    // Reported before validation so a short or long stream is still visible.
    println!("# bytes: {}", raw.len());

    let histogram = Histogram::from_counts(&raw)?;
    let entropy = shannon_entropy(&histogram)?;
    debug!(entropy, "computed Shannon entropy");

    println!("{}", Verdict::from_entropy(entropy));
    Ok(())
}
