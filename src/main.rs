use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use freqcode::{
    aggregate, load_frequency_table, save_frequency_table, Comparator, FrequencyCounter,
    DEFAULT_DIGRAM_CAP,
};
use log::info;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "freqcode",
    about = "Builds prefix codes from observed text frequencies and compares coding schemes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count character and digram frequencies in a text file
    Analyze {
        /// Text file to analyze
        file: PathBuf,
        /// Directory the frequency table is written to, named after the file
        #[arg(long, default_value = "results")]
        out_dir: PathBuf,
    },
    /// Merge every frequency table in a directory into index.json
    Aggregate {
        /// Directory of *.json frequency tables
        dir: PathBuf,
    },
    /// Compare standard and compact coding line-by-line over a corpus
    Compare {
        /// Persisted frequency table to build both codecs from
        table: PathBuf,
        /// Text corpus to encode line by line
        corpus: PathBuf,
        /// Maximum number of digrams in the compact alphabet
        #[arg(long, default_value_t = DEFAULT_DIGRAM_CAP)]
        digrams: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Analyze { file, out_dir } => analyze(&file, &out_dir),
        Command::Aggregate { dir } => aggregate_dir(&dir),
        Command::Compare {
            table,
            corpus,
            digrams,
        } => compare(&table, &corpus, digrams),
    }
}

fn analyze(file: &Path, out_dir: &Path) -> Result<()> {
    info!("analyzing {}", file.display());

    let table = FrequencyCounter::new().count_file(file)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    let out = out_dir.join(format!("{stem}.json"));
    save_frequency_table(&table, &out)?;

    println!("{} symbols -> {}", table.len(), out.display());
    Ok(())
}

fn aggregate_dir(dir: &Path) -> Result<()> {
    info!("aggregating tables from {}", dir.display());

    let mut tables = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            info!("merging {}", path.display());
            tables.push(load_frequency_table(&path)?);
        }
    }

    let merged = aggregate(&tables);
    let out = dir.join("index.json");
    save_frequency_table(&merged, &out)?;

    println!(
        "merged {} tables, {} symbols -> {}",
        tables.len(),
        merged.len(),
        out.display()
    );
    Ok(())
}

fn compare(table_path: &Path, corpus: &Path, digrams: usize) -> Result<()> {
    let table = load_frequency_table(table_path)?;
    let comparator = Comparator::with_digram_cap(&table, digrams);

    let file = File::open(corpus).with_context(|| format!("open corpus {}", corpus.display()))?;
    let report = comparator.compare_reader(BufReader::new(file))?;

    let verdict = if report.compact_wins() {
        "compact is smaller on average"
    } else {
        "compact is not smaller on average"
    };
    println!(
        "{} lines: compact shorter on {}, not shorter on {} -> {}",
        report.lines, report.compact_shorter, report.compact_not_shorter, verdict
    );
    println!(
        "average saving {:.2} bits per line ({} total)",
        report.average_saved_bits(),
        report.total_saved_bits
    );
    Ok(())
}
