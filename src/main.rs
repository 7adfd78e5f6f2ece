//! Posy CLI
//!
//! Reads a bouquet-design-and-flowers description from a file or standard
//! input, allocates bouquets per size group and prints their codes, large
//! bouquets first.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use posy::{
    allocators::{Allocator, greedy::GreedyAllocator},
    bouquets::BouquetCollection,
    ledger::InventoryLedger,
    parser::{self, ParsedInput},
    report,
    species::SizeGroup,
};

/// Arguments for the posy CLI
#[derive(Debug, Parser)]
#[command(name = "posy", about = "Greedy flower-to-bouquet allocator")]
struct Args {
    /// Input file with bouquet designs and flowers; standard input when omitted
    input: Option<PathBuf>,

    /// Also write the encoded bouquets to this file
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Print a per-group allocation summary after the bouquet codes
    #[clap(short, long)]
    summary: bool,
}

#[expect(clippy::print_stdout, reason = "CLI output")]
fn main() -> Result<()> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => read_stdin()?,
    };

    let input = parser::parse_input(&text)?;

    if input.is_empty() {
        println!("empty input; nothing to do");
        return Ok(());
    }

    let ParsedInput {
        catalog,
        mut large,
        mut small,
    } = input;

    let mut results: Vec<(BouquetCollection, InventoryLedger)> = Vec::new();
    let mut codes = Vec::new();

    for group in SizeGroup::ALL {
        let ledger = match group {
            SizeGroup::Large => &mut large,
            SizeGroup::Small => &mut small,
        };

        let collection = GreedyAllocator::allocate(&catalog, group, ledger)?;
        codes.extend(collection.codes(&catalog)?);
        results.push((collection, ledger.clone()));
    }

    for code in &codes {
        println!("{code}");
    }

    if let Some(path) = &args.out {
        let mut file = fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;

        for code in &codes {
            writeln!(file, "{code}")?;
        }
    }

    if args.summary {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        report::write_summaries(&mut handle, &catalog, &results)?;
    }

    Ok(())
}

/// Read standard input until two blank lines or end of input.
fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    let mut text = String::new();
    let mut blanks = 0;

    for line in stdin.lock().lines() {
        let line = line?;

        if line.trim().is_empty() {
            blanks += 1;
        }

        text.push_str(&line);
        text.push('\n');

        if blanks == 2 {
            break;
        }
    }

    Ok(text)
}
