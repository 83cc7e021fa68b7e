use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use namesake::config::Config;
use namesake::corpus::{CsvFileSource, HttpCsvSource, LabelSource};
use namesake::output::{json::SimilarityReport, terminal};
use namesake::similarity::{self, VectorizedCorpus};

/// Namesake: find near-duplicate names and descriptions.
///
/// Scores every pair of labels in a CSV column by bag-of-words cosine
/// similarity, so variant spellings of the same name stand out.
#[derive(Parser)]
#[command(name = "namesake", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read labels from. Defaults to NAMESAKE_CORPUS_URL.
#[derive(Args)]
struct SourceArgs {
    /// Read labels from a local CSV file
    #[arg(long, conflicts_with = "url")]
    file: Option<std::path::PathBuf>,

    /// Fetch labels from a CSV at this URL
    #[arg(long)]
    url: Option<String>,

    /// Zero-based column holding the labels (overrides NAMESAKE_COLUMN)
    #[arg(long)]
    column: Option<usize>,

    /// Treat the first row as data rather than a header
    #[arg(long)]
    no_header: bool,

    /// Character encoding of the file, e.g. windows-874 (overrides NAMESAKE_ENCODING)
    #[arg(long)]
    encoding: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every pair of labels
    Compare {
        #[command(flatten)]
        source: SourceArgs,

        /// Word used for each label in the output (overrides NAMESAKE_ITEM_NOUN)
        #[arg(long, conflicts_with_all = ["ranked", "json"])]
        noun: Option<String>,

        /// Show pairs as a table, highest score first
        #[arg(long)]
        ranked: bool,

        /// With --ranked, how many pairs to show (default: 20)
        #[arg(long, default_value = "20", requires = "ranked")]
        top: usize,

        /// Hide pairs scoring below this value (display only)
        #[arg(long, default_value = "0")]
        min_score: f64,

        /// Emit a JSON report of every pair instead of text
        #[arg(long, conflicts_with_all = ["ranked", "min_score"])]
        json: bool,
    },

    /// Show the labels closest to one label
    Similar {
        /// 1-based label number, as printed by `compare`
        index: usize,

        #[command(flatten)]
        source: SourceArgs,

        /// How many neighbours to show (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Show normalized tokens and the shared vocabulary
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("namesake=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            source,
            noun,
            ranked,
            top,
            min_score,
            json,
        } => {
            let loader = build_source(&config, &source)?;
            let labels = loader.load().await?;
            info!(source = %loader.describe(), labels = labels.len(), "Comparing labels");

            let corpus = VectorizedCorpus::new(&labels);
            let results = corpus.pairs()?;

            if json {
                let report = SimilarityReport::new(
                    loader.describe(),
                    &labels,
                    corpus.vocabulary().len(),
                    &results,
                );
                println!("{}", report.to_json()?);
            } else if ranked {
                let ranked_results = similarity::rank(results);
                terminal::display_ranked(&ranked_results, &labels, top, min_score);
            } else {
                let noun = noun.unwrap_or_else(|| config.item_noun.clone());
                terminal::display_similarities(&results, &noun, min_score);
            }
        }

        Commands::Similar { index, source, top } => {
            let loader = build_source(&config, &source)?;
            let labels = loader.load().await?;

            if index == 0 || index > labels.len() {
                anyhow::bail!(
                    "Label #{index} out of range: the corpus has {} labels",
                    labels.len()
                );
            }

            let corpus = VectorizedCorpus::new(&labels);
            let neighbors = corpus.most_similar(index - 1, top)?;
            terminal::display_neighbors(index - 1, &neighbors, &labels);
        }

        Commands::Inspect { source } => {
            let loader = build_source(&config, &source)?;
            let labels = loader.load().await?;
            let corpus = VectorizedCorpus::new(&labels);
            terminal::display_inspection(&corpus, &labels);
            println!(
                "\n{}",
                "Tokens are lower-cased with punctuation deleted, e.g. O'Brien -> obrien.".dimmed()
            );
        }
    }

    Ok(())
}

/// Pick the label source from CLI flags, falling back to the configured URL.
fn build_source(config: &Config, args: &SourceArgs) -> Result<Box<dyn LabelSource>> {
    let mut config = config.clone();
    if let Some(column) = args.column {
        config.column = column;
    }
    if let Some(encoding) = &args.encoding {
        config.encoding = encoding.clone();
    }
    let options = config.csv_options(!args.no_header)?;

    let source: Box<dyn LabelSource> = match (&args.file, &args.url) {
        (Some(path), _) => Box::new(CsvFileSource::new(path, options)),
        (None, Some(url)) => Box::new(HttpCsvSource::new(url, options)?),
        (None, None) => Box::new(HttpCsvSource::new(&config.corpus_url, options)?),
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("namesake").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compare_flag_combinations_accepted() {
        assert!(parse(&["compare", "--noun", "developer", "--min-score", "0.5"]).is_ok());
        assert!(parse(&["compare", "--ranked", "--top", "5", "--min-score", "0.5"]).is_ok());
        assert!(parse(&["compare", "--json", "--file", "names.csv"]).is_ok());
    }

    #[test]
    fn test_ignored_output_flags_are_rejected() {
        assert!(parse(&["compare", "--ranked", "--noun", "developer"]).is_err());
        assert!(parse(&["compare", "--json", "--noun", "developer"]).is_err());
        assert!(parse(&["compare", "--json", "--ranked"]).is_err());
        assert!(parse(&["compare", "--json", "--min-score", "0.5"]).is_err());
        assert!(parse(&["compare", "--json", "--top", "5"]).is_err());
        assert!(parse(&["compare", "--top", "5"]).is_err());
    }

    #[test]
    fn test_file_and_url_conflict() {
        assert!(parse(&["compare", "--file", "a.csv", "--url", "http://x/a.csv"]).is_err());
    }
}
