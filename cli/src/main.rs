//! docspace CLI - blank-line cleanup for document trees

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use docspace::{
    is_within_list_context, load_file, remove_trailing_blanks_in_table_cells, save_file,
    BlankLineStats, CleanupOptions, CleanupPipeline, CleanupPreset, JsonFormat,
    TrailingBlankOptions,
};

#[derive(Parser)]
#[command(name = "docspace")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Insert, mark and prune blank paragraphs in document trees", long_about = None)]
struct Cli {
    /// Input document (JSON), tidied in place with the standard preset
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the blank-line cleanup pipeline over one or more documents
    Tidy {
        /// Input documents (JSON)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (files are rewritten in place if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Cleanup preset
        #[arg(long, value_enum)]
        preset: Option<PresetLevel>,

        /// Cleanup options file (JSON); overrides the preset
        #[arg(short, long, value_name = "FILE", env = "DOCSPACE_CONFIG")]
        config: Option<PathBuf>,

        /// Keep preserved trailing blanks in table cells
        #[arg(long)]
        respect_preserved: bool,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document structure and pending blank-line work
    Info {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetLevel {
    /// Trailing blanks in table cells only
    Minimal,
    /// Trailing cell blanks, duplicate blanks, spacing after tables (default)
    Standard,
    /// Every pass, including list spacing
    Aggressive,
}

impl From<PresetLevel> for CleanupPreset {
    fn from(level: PresetLevel) -> Self {
        match level {
            PresetLevel::Minimal => CleanupPreset::Minimal,
            PresetLevel::Standard => CleanupPreset::Standard,
            PresetLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Tidy {
            inputs,
            output,
            preset,
            config,
            respect_preserved,
            compact,
        }) => cmd_tidy(
            &inputs,
            output.as_deref(),
            preset,
            config.as_deref(),
            respect_preserved,
            compact,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: tidy in place if input is provided
            if let Some(input) = cli.input {
                cmd_tidy(&[input], None, None, None, false, false)
            } else {
                println!("{}", "Usage: docspace <FILE>".yellow());
                println!("       docspace --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(
    preset: Option<PresetLevel>,
    config: Option<&Path>,
    respect_preserved: bool,
) -> Result<CleanupOptions, Box<dyn std::error::Error>> {
    let mut options = match config {
        Some(path) => CleanupOptions::from_json(&fs::read_to_string(path)?)?,
        None => CleanupOptions::from_preset(preset.map(CleanupPreset::from).unwrap_or_default()),
    };

    if respect_preserved {
        options = options.with_trailing(TrailingBlankOptions::new().respect_preserved());
    }

    if !options.has_passes() {
        log::warn!("no cleanup pass is enabled; documents will be rewritten unchanged");
    }

    Ok(options)
}

fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match (output_dir, input.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => input.to_path_buf(),
    }
}

fn tidy_one(
    input: &Path,
    output: &Path,
    pipeline: &CleanupPipeline,
    format: JsonFormat,
) -> docspace::Result<BlankLineStats> {
    let mut doc = load_file(input)?;
    let stats = pipeline.process(&mut doc)?;
    save_file(&doc, output, format)?;
    Ok(stats)
}

fn cmd_tidy(
    inputs: &[PathBuf],
    output: Option<&Path>,
    preset: Option<PresetLevel>,
    config: Option<&Path>,
    respect_preserved: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(preset, config, respect_preserved)?;
    let pipeline = CleanupPipeline::new(options);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Tidying...");

    let results: Vec<(&PathBuf, docspace::Result<BlankLineStats>)> = inputs
        .par_iter()
        .map(|input| {
            let result = tidy_one(input, &output_path(input, output), &pipeline, format);
            pb.inc(1);
            (input, result)
        })
        .collect();

    pb.finish_with_message("Done!");
    println!();

    let mut total = BlankLineStats::new();
    let mut failures = 0;
    for (input, result) in &results {
        match result {
            Ok(stats) => {
                total.merge(stats);
                println!(
                    "{} {}: {} added, {} marked, {} removed",
                    "✓".green(),
                    input.display(),
                    stats.added,
                    stats.marked,
                    stats.removed
                );
            }
            Err(e) => {
                failures += 1;
                println!("{} {}: {}", "✗".red(), input.display(), e);
            }
        }
    }

    if results.len() > 1 {
        println!(
            "\n{} {} added, {} marked, {} skipped, {} removed",
            "Total:".green().bold(),
            total.added,
            total.marked,
            total.skipped,
            total.removed
        );
    }

    if failures > 0 {
        return Err(format!("{} of {} documents failed", failures, results.len()).into());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let summary = doc.summary();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    println!("{}: {}", "Body elements".bold(), doc.len());

    println!();
    println!("{}", "Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), summary.paragraph_count);
    println!("{}: {}", "Blank paragraphs".bold(), summary.blank_count);
    println!("{}: {}", "Preserved".bold(), summary.preserved_count);
    println!("{}: {}", "List items".bold(), summary.list_item_count);
    println!("{}: {}", "Tables".bold(), summary.table_count);
    println!("{}: {}", "Cells".bold(), summary.cell_count);
    if summary.opaque_count > 0 {
        println!("{}: {}", "Other elements".bold(), summary.opaque_count);
    }

    let blanks_in_lists = (0..doc.len())
        .filter(|&i| doc.body[i].is_blank_paragraph() && is_within_list_context(&doc, i))
        .count();
    let mut preview = doc.clone();
    let trailing =
        remove_trailing_blanks_in_table_cells(&mut preview, &TrailingBlankOptions::default());

    println!();
    println!("{}", "Blank Lines".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blanks inside lists".bold(), blanks_in_lists);
    println!("{}: {}", "Trailing cell blanks".bold(), trailing);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docspace".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Blank-line cleanup for document trees");
    println!();
    println!("License: MIT");
}
