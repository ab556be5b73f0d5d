//! The search engine.
//!
//! [`search`] takes plain data (a dictionary, a tileset and a [`SearchRequest`]) and returns
//! plain data (a [`SearchResponse`]). It has no state of its own; the direct
//! [`Finder`](crate::Finder) and the message based [`Worker`](crate::Worker) both call it.
use crate::dictionary::{Dictionary, Entry};
use crate::filters::{Filters, LengthFilter};
use crate::formable;
use crate::labelset::LabelSet;
use crate::pattern::Pattern;
use crate::rack::{Rack, MAX_RACK_LEN};
use crate::ranker;
use crate::score::score;
use crate::tilebag::TileBag;
use crate::tilesets::TileSet;
use crate::Error;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

/// A word that can be played.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Candidate {
    /// The word in uppercase
    pub word: String,
    /// Points for the word, wildcards score 0
    pub score: u32,
    /// Number of letters
    pub length: usize,
    /// Number of wildcards needed
    pub used_jokers: usize,
}

/// A search: the rack, and the filters to apply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    pub rack: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub filters: Filters,
}

impl SearchRequest {
    pub fn new(rack: &str, filters: Filters) -> SearchRequest {
        SearchRequest {
            rack: String::from(rack),
            filters,
        }
    }
}

/// The sorted results of a search.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SearchResponse {
    pub results: Vec<Candidate>,
    /// Time taken by the search, for diagnostics only
    pub elapsed_ms: f64,
    pub total_found: usize,
}

impl SearchResponse {
    fn new(results: Vec<Candidate>, started: Instant) -> SearchResponse {
        SearchResponse {
            total_found: results.len(),
            results,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// No words found. This is a normal outcome of a valid search.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Everything needed to test a single dictionary entry.
struct Query<'a> {
    rack: &'a Rack,
    pattern: Option<&'a Pattern>,
    fixed: Option<TileBag>,
    /// Letters on the rack or the board, when there are no wildcards
    available: Option<LabelSet>,
    length: LengthFilter,
    tileset: &'a TileSet,
}

impl<'a> Query<'a> {
    /// Return the candidate for `entry` if it can be played and passes all filters.
    fn evaluate(&self, entry: &Entry) -> Option<Candidate> {
        let len = entry.len();
        if !self.length.accepts(len) {
            return None;
        }
        if let Some(available) = &self.available {
            if !entry.letters().is_subset(available) {
                return None;
            }
        }
        let letters = TileBag::from(entry.labels());
        let fit = formable::fit(&letters, self.rack, self.fixed.as_ref())?;
        if !fit.is_playable() {
            return None;
        }
        if let Some(pattern) = self.pattern {
            if !pattern.is_match(entry.labels()) {
                return None;
            }
        }
        Some(Candidate {
            word: String::from(entry.word()),
            score: score(entry.labels(), fit.wildcards, self.tileset),
            length: len,
            used_jokers: fit.wildcards,
        })
    }
}

/// Find all words in `dictionary` that can be formed with the rack and board pattern of
/// `request`, score and sort them.
/// ## Errors
/// - If the rack is not valid: longer than 15 characters, or with symbols other than letters,
///   wildcards (`?`, `_`, `*`) and spaces.
/// - If the length filter is not valid.
///
/// A board pattern that can not be compiled matches no word; the result is then empty.
/// ## Examples
/// ```
/// use ordfinder::{search, Dictionary, SearchRequest, Filters, TileSet};
/// let tileset = TileSet::default();
/// let dictionary = Dictionary::from_words(&["træ", "nor", "træon"], tileset.codec());
/// let request = SearchRequest::new("TRÆON", Filters::new());
/// let response = search::search(&dictionary, &tileset, &request)?;
/// let words: Vec<_> = response.results.iter().map(|c| c.word.as_str()).collect();
/// assert_eq!(words, vec!["TRÆON", "TRÆ", "NOR"]);
/// # Ok::<(), ordfinder::Error>(())
/// ```
pub fn search(
    dictionary: &Dictionary,
    tileset: &TileSet,
    request: &SearchRequest,
) -> Result<SearchResponse, Error> {
    let started = Instant::now();
    let codec = tileset.codec();
    let rack = Rack::parse(&request.rack, codec)?;
    if rack.len() > MAX_RACK_LEN {
        return Err(Error::RackTooLong(rack.len()));
    }
    let filters: &Filters = &request.filters;
    filters.validate()?;

    let pattern = match filters.board_pattern() {
        Some(pattern) => match Pattern::compile(pattern, codec) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                debug!("board pattern \"{}\" matches nothing: {}", pattern, err);
                return Ok(SearchResponse::new(Vec::new(), started));
            }
        },
        None => None,
    };
    let fixed = pattern.as_ref().map(Pattern::fixed_letters);
    let available = match (rack.wildcards(), &fixed) {
        (0, Some(fixed)) => Some(rack.label_set().union(&fixed.labels())),
        (0, None) => Some(rack.label_set()),
        _ => None,
    };
    let query = Query {
        rack: &rack,
        pattern: pattern.as_ref(),
        fixed,
        available,
        length: filters.length,
        tileset,
    };

    #[cfg(feature = "rayon")]
    let matches: Vec<Candidate> = dictionary
        .entries()
        .par_iter()
        .filter_map(|entry| query.evaluate(entry))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let matches: Vec<Candidate> = dictionary
        .iter()
        .filter_map(|entry| query.evaluate(entry))
        .collect();

    let mut seen = HashSet::new();
    let mut results: Vec<Candidate> = matches
        .into_iter()
        .filter(|candidate| seen.insert(candidate.word.clone()))
        .collect();
    ranker::sort(&mut results, filters.sort_by, codec);

    let response = SearchResponse::new(results, started);
    debug!(
        "rack \"{}\": {} words in {:.2} ms",
        rack.text(),
        response.total_found,
        response.elapsed_ms
    );
    Ok(response)
}
