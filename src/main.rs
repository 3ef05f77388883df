use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;

use subset_words::alphabet::normalize;
use subset_words::logging::init_logger;
use subset_words::{FileFormat, SearchConfig, Wordlist};

const DEFAULT_WORDS: &[&str] = &["cat", "dog", "museum", "photosynthesis", "typewriter"];

/// Find every dictionary word that can be spelled from a subset of each input word's letters.
#[derive(StructOpt)]
struct Cli {
    /// Dictionary file, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Words to search for (defaults to a small sample)
    words: Vec<String>,
    /// Longest input searched by trying every arrangement of its letters
    #[structopt(long, default_value = "9")]
    permutation_limit: usize,
    /// Fold dictionary and input words to lowercase
    #[structopt(long)]
    lowercase: bool,
    /// Column delimiter for multi-column dictionaries
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is given
    #[structopt(long, default_value = "0")]
    word_column: usize,
    /// Print one JSON object per input word
    #[structopt(long)]
    json: bool,
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::from_args();
    init_logger(args.verbose);

    let start = Instant::now();

    let format = match args.delimiter {
        Some(delimiter) => FileFormat::builder()
            .delimiter(delimiter)
            .word_column(args.word_column)
            .lowercase(args.lowercase)
            .build(),
        None => FileFormat::builder().lowercase(args.lowercase).build(),
    };
    let wl = Wordlist::from_file(&args.path, format)
        .with_context(|| format!("loading dictionary {}", args.path.display()))?;

    let inputs: Vec<String> = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words.iter().map(|w| normalize(w, args.lowercase)).collect()
    };

    let config = SearchConfig::builder().permutation_limit(args.permutation_limit).build();
    for outcome in wl.search_all(inputs.iter().map(|w| w.as_str()), config) {
        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{:?}", outcome.matches);
        }
    }

    println!("Execution time is: {:.4} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
