//! Golden-file runner: every `<dir>/*.yaml` must generate exactly `<dir>/*.go`.
//!
//! The root struct is named after the file stem (`config.yaml` → `Config`).
//! `--bless` rewrites the `.go` files from the current output instead.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rayon::prelude::*;

#[derive(Parser, Debug)]
struct Args {
    /// directory holding `*.yaml` / `*.go` pairs
    #[arg(default_value = "samples")]
    dir: PathBuf,

    /// overwrite the expected `.go` files
    #[arg(long)]
    bless: bool,

    /// emit json tags as well
    #[arg(long)]
    json: bool,
}

enum Outcome {
    Pass,
    Blessed,
    Fail(String),
}

fn main() -> Result<()> {
    let args = Args::parse();
    let pattern = args.dir.join("*.yaml");
    let pattern = pattern.to_string_lossy();

    let mut samples = Vec::new();
    for entry in glob::glob(&pattern)? {
        samples.push(entry?);
    }
    samples.sort();
    if samples.is_empty() {
        anyhow::bail!("no samples matched {pattern}");
    }

    let outcomes: Vec<(PathBuf, Result<Outcome>)> = samples
        .into_par_iter()
        .map(|path| {
            let outcome = check_sample(&path, &args);
            (path, outcome)
        })
        .collect();

    let mut failed = 0;
    for (path, outcome) in &outcomes {
        let name = path.display();
        match outcome {
            Ok(Outcome::Pass) => eprintln!("{} {name}", "pass".green()),
            Ok(Outcome::Blessed) => eprintln!("{} {name}", "blessed".yellow()),
            Ok(Outcome::Fail(diff)) => {
                failed += 1;
                eprintln!("{} {name}\n{diff}", "FAIL".red().bold());
            }
            Err(error) => {
                failed += 1;
                eprintln!("{} {name}: {error:#}", "ERROR".red().bold());
            }
        }
    }

    eprintln!("{} samples, {} failed", outcomes.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn check_sample(path: &Path, args: &Args) -> Result<Outcome> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let struct_name = yaml2go::naming::to_camel(&stem);
    let options = yaml2go::GenerateOptions { json_tag: args.json, ..Default::default() };
    let actual = yaml2go::generate_go_struct(&source, &struct_name, &options)?;

    let golden = path.with_extension("go");
    if args.bless {
        std::fs::write(&golden, &actual)
            .with_context(|| format!("failed to write {}", golden.display()))?;
        return Ok(Outcome::Blessed);
    }

    let expected = std::fs::read_to_string(&golden)
        .with_context(|| format!("missing golden file {}", golden.display()))?;
    if expected == actual {
        Ok(Outcome::Pass)
    } else {
        Ok(Outcome::Fail(line_diff(&expected, &actual)))
    }
}

/// First differing lines only; enough to spot what moved.
fn line_diff(expected: &str, actual: &str) -> String {
    let mut out = String::new();
    let mut exp = expected.lines();
    let mut act = actual.lines();
    let mut line = 0;
    loop {
        line += 1;
        match (exp.next(), act.next()) {
            (None, None) => break,
            (e, a) if e == a => continue,
            (e, a) => {
                out.push_str(&format!("  line {line}:\n"));
                out.push_str(&format!("    {} {}\n", "-".red(), e.unwrap_or("<eof>")));
                out.push_str(&format!("    {} {}\n", "+".green(), a.unwrap_or("<eof>")));
                if out.lines().count() >= 15 {
                    break;
                }
            }
        }
    }
    if out.is_empty() {
        out.push_str("  (trailing whitespace differs)\n");
    }
    out
}
