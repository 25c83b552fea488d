#![warn(non_snake_case)]
//! # cavern_ed entry point
//!
//! `cavern_ed edit` opens the terminal level editor (the default when no
//! subcommand is given). `cavern_ed generate` prints generated grids to
//! stdout, one block of rows per grid.
//!
//! Logging goes through `env_logger` and honors `RUST_LOG`. While the editor
//! owns the terminal, log output is written to `--log-file` or dropped.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cavern_ed::document::LevelStore;
use cavern_ed::editor::{Editor, EditorSettings};
use cavern_ed::generator::{self, DungeonType, GeneratorConfig};
use clap::{Args, Parser, Subcommand};
use env_logger::Target;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "cavern_ed", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the terminal level editor.
    Edit(EditArgs),
    /// Generate grids and print them.
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
struct EditArgs {
    /// Width of the preview grid.
    #[arg(long)]
    preview_width: Option<i64>,
    /// Height of the preview grid.
    #[arg(long)]
    preview_height: Option<i64>,
    /// Write log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// JSON map with `Width` and `Height` keys.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<i64>,
    #[arg(long)]
    height: Option<i64>,
    #[arg(long = "type", default_value_t = DungeonType::Cavern)]
    dungeon_type: DungeonType,
    /// Seed for reproducible output. Grid `n` uses `seed + n`.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of grids to generate.
    #[arg(long, default_value_t = 1)]
    count: u64,
}

fn init_logging(log_file: Option<&Path>, owns_terminal: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    } else if owns_terminal {
        builder.target(Target::Pipe(Box::new(io::sink())));
    }
    builder.init();
    Ok(())
}

fn run_editor(args: EditArgs) -> Result<()> {
    init_logging(args.log_file.as_deref(), true)?;

    let defaults = EditorSettings::default();
    let settings = EditorSettings {
        preview: defaults.preview.merged(GeneratorConfig {
            width: args.preview_width,
            height: args.preview_height,
        }),
    };
    // Fail before taking over the terminal rather than on the first preview.
    settings
        .preview
        .dimensions()
        .context("invalid preview size")?;

    let mut editor = Editor::new(LevelStore::new(), settings);
    cavern_ed::ui::run(&mut editor)
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    info!("Loading {}", path.display());
    let text =
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    GeneratorConfig::from_json(&text).with_context(|| format!("in {}", path.display()))
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    init_logging(None, false)?;

    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    let config = file_config.merged(GeneratorConfig {
        width: args.width,
        height: args.height,
    });

    let grids = match args.seed {
        Some(seed) => {
            let seeds: Vec<u64> = (0..args.count).map(|n| seed.wrapping_add(n)).collect();
            generator::generate_batch(&config, args.dungeon_type, &seeds)?
        }
        None => (0..args.count)
            .map(|_| generator::generate_with_thread_rng(&config, args.dungeon_type))
            .collect::<Result<Vec<_>, _>>()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (n, grid) in grids.iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", grid)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Edit(EditArgs::default())) {
        Commands::Edit(args) => run_editor(args),
        Commands::Generate(args) => run_generate(args),
    }
}
