use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pf_app::{AnalyzeOptions, AppResult, analyze_table, load_settings, validate_table};
use pf_hydraulics::ColebrookConfig;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PipeFlow CLI - Pipe-flow hydraulics table analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a table and write the augmented copy
    Analyze {
        /// Path to the input CSV table
        input: PathBuf,
        /// Output folder (defaults to an Output folder beside the input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Solver settings file (YAML)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Check that a table is readable and report its shape
    Validate {
        /// Path to the input CSV table
        input: PathBuf,
    },
    /// Pick and analyze tables from a folder, one after another
    Interactive {
        /// Folder to list; prompted for when omitted
        folder: Option<PathBuf>,
        /// Output folder (defaults to an Output folder beside each input)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Solver settings file (YAML)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output_dir,
            settings,
        } => cmd_analyze(&input, build_options(settings.as_deref(), output_dir)?),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Interactive {
            folder,
            output_dir,
            settings,
        } => cmd_interactive(folder, build_options(settings.as_deref(), output_dir)?),
    }
}

fn build_options(settings: Option<&Path>, output_dir: Option<PathBuf>) -> AppResult<AnalyzeOptions> {
    let colebrook = match settings {
        Some(path) => load_settings(path)?.into(),
        None => ColebrookConfig::default(),
    };
    Ok(AnalyzeOptions {
        colebrook,
        output_dir,
    })
}

fn cmd_analyze(input: &Path, options: AnalyzeOptions) -> AppResult<()> {
    println!("Analyzing table: {}", input.display());
    let report = analyze_table(input, &options)?;
    println!("✓ {} rows analyzed", report.rows);
    println!("Output saved as: {}", report.output_path.display());
    Ok(())
}

fn cmd_validate(input: &Path) -> AppResult<()> {
    println!("Validating table: {}", input.display());
    let summary = validate_table(input)?;
    println!("✓ Table is readable");
    println!("  Data rows: {}", summary.rows);
    println!("  Columns: {}", summary.header.join(", "));
    Ok(())
}

/// The interactive shell: list the CSV tables in a folder, analyze the
/// selected one, then offer another round. Invalid input re-prompts rather
/// than aborting; a failed analysis prints the error and returns to the
/// prompt.
fn cmd_interactive(folder: Option<PathBuf>, options: AnalyzeOptions) -> AppResult<()> {
    println!("=== PipeFlow Table Analyzer ===");

    loop {
        let dir = match &folder {
            Some(fixed) => fixed.clone(),
            None => PathBuf::from(read_line("\nFolder with input tables: ")?.trim()),
        };

        if !dir.is_dir() {
            println!("Not a folder: {}", dir.display());
            if folder.is_some() {
                return Ok(());
            }
            continue;
        }

        let files = list_tables(&dir)?;
        if files.is_empty() {
            println!("No .csv tables in {}", dir.display());
            if folder.is_some() {
                return Ok(());
            }
            continue;
        }

        println!("\nTables in {}:", dir.display());
        for (idx, file) in files.iter().enumerate() {
            println!("{}) {}", idx + 1, file_name(file));
        }

        let selection = read_line("\nSelect a table by number (q to quit): ")?;
        let selection = selection.trim();
        if selection.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        let choice = match selection.parse::<usize>() {
            Ok(n) if (1..=files.len()).contains(&n) => n,
            _ => {
                println!("Invalid selection.");
                continue;
            }
        };

        let input = &files[choice - 1];
        println!("\nTable chosen: {}", file_name(input));
        match analyze_table(input, &options) {
            Ok(report) => {
                println!("✓ {} rows analyzed", report.rows);
                println!("Output saved as: {}", report.output_path.display());
            }
            Err(err) => println!("Analysis failed: {err}"),
        }

        let again = read_line("\nPress [Enter] to analyze another table, or q to quit: ")?;
        if again.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }
    }
}

fn list_tables(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_line(prompt: &str) -> AppResult<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
