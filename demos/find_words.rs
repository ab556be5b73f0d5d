use anyhow::Result;
use clap::Parser;
use ordfinder::{Engine, Filters, Finder, LengthFilter, SearchRequest, SortBy};
use std::time::Instant;

/// Find all words that can be played with a rack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The letters on the rack, `?`, `_` or `*` for a wildcard
    rack: String,

    /// Path to the wordfile, one word per line
    #[arg(short, long, default_value = "wordlists/words-da.txt")]
    wordfile: String,

    /// Letters on the board: `.` is one letter, `*` any number of letters
    #[arg(short, long)]
    pattern: Option<String>,

    /// Only words with exactly this many letters
    #[arg(short, long, conflicts_with_all = ["min", "max"])]
    exact: Option<usize>,

    /// Shortest word
    #[arg(long)]
    min: Option<usize>,

    /// Longest word
    #[arg(long)]
    max: Option<usize>,

    /// Sort order: score, length or alpha
    #[arg(short, long, default_value = "score")]
    sort: String,

    /// Maximum number of results to show
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,

    /// Print the response as json, needs the `serde` feature
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn filters(&self) -> Filters {
        let length = match (self.exact, self.min, self.max) {
            (Some(exact_length), _, _) => LengthFilter::Exact { exact_length },
            (None, None, None) => LengthFilter::All,
            (None, min, max) => LengthFilter::Range {
                min_length: min.unwrap_or(2),
                max_length: max.unwrap_or(15),
            },
        };
        let mut filters = Filters::new()
            .with_length(length)
            .with_sort(SortBy::from(self.sort.as_str()));
        if let Some(pattern) = &self.pattern {
            filters = filters.with_board_pattern(pattern);
        }
        filters
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let t0 = Instant::now();
    let finder = Finder::default().with_dictionary_from_file(&cli.wordfile)?;
    println!("{} in {:?}", finder, t0.elapsed());

    let engine = Engine::start(finder);
    let request = SearchRequest::new(&cli.rack, cli.filters());
    let response = engine.search(request.clone())?;

    #[cfg(feature = "serde")]
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }
    #[cfg(not(feature = "serde"))]
    if cli.json {
        log::warn!("json output needs the serde feature");
    }

    println!(
        "{}: {} words in {:.2} ms",
        cli.rack, response.total_found, response.elapsed_ms
    );
    let pattern = request.filters.board_pattern();
    for candidate in response.results.iter().take(cli.limit) {
        let word = match pattern {
            Some(pattern) => {
                let highlight = engine.finder().highlight(&candidate.word, pattern);
                format!("[{}]{}", highlight.matched, highlight.rest)
            }
            None => candidate.word.clone(),
        };
        println!(
            "{:<17} {:>3} points {:>2} letters {} wildcards",
            word, candidate.score, candidate.length, candidate.used_jokers
        );
    }
    Ok(())
}
