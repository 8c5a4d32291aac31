//! Minimal CLI: yaml → (go | ir)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use yaml2go::{GenerateOptions, DEFAULT_STRUCT_NAME};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate Go struct declarations from a YAML document
#[derive(Parser, Debug)]
#[command(name = "yaml2go", version)]
pub struct CommandLineInterface {
    /// path to the YAML input file
    #[arg(short, long)]
    input: PathBuf,

    /// output .go file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// name of the root Go struct
    #[arg(long = "struct", default_value = DEFAULT_STRUCT_NAME)]
    struct_name: String,

    /// also emit `json:"<key>"` tags
    #[arg(long, default_value_t = false)]
    json: bool,

    /// what to print
    #[arg(long, value_enum, default_value_t = Format::Go)]
    format: Format,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Go source
    Go,
    /// the declaration list as JSON (debug view)
    Ir,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        let source = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read file {}", self.input.display()))?;

        let options = GenerateOptions { json_tag: self.json, ..GenerateOptions::default() };
        let rendered = match self.format {
            Format::Go => yaml2go::generate_go_struct(&source, &self.struct_name, &options)
                .context("failed to generate go struct")?,
            Format::Ir => {
                let decls = yaml2go::generate_declarations(&source, &self.struct_name, &options)
                    .context("failed to generate go struct")?;
                let mut json = serde_json::to_string_pretty(&decls)?;
                json.push('\n');
                json
            }
        };

        match self.output.as_ref() {
            Some(out) => {
                write_output(out, &rendered)?;
                info!(path = %out.display(), "wrote output");
                println!("Generated struct written to {}", out.display());
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(out, contents)
        .with_context(|| format!("failed to write output file {}", out.display()))
}
