//! A Danish word finder for Rust.
//! <br>
//! This crate finds all dictionary words that can be formed from the letters on a wordfeud
//! rack, optionally constrained by a pattern of letters already on the board, and ranks them
//! by score, length or alphabet order.
//! Racks may contain wildcards (`?`, `_` or `*`) that stand for any letter and score 0.
//! It can use the `rayon` crate to scan the dictionary in parallel.
//!
//! # How to use `ordfinder`
//! Start by creating a [`Finder`], then specify the dictionary to be used.
//! The dictionary must be in utf-8 and contain one word per line.
//! A search takes the rack and a set of [`Filters`]: an optional board pattern, a length
//! restriction and the sort order.
//!
//! # Basic usage
//!  ```
//! use ordfinder::{Filters, Finder, LengthFilter, SortBy};
//!
//! let finder = Finder::default().with_dictionary_from_words(&["træ", "nor", "træon", "mand"]);
//! let response = finder.search("TRÆON", &Filters::new())?;
//! assert_eq!(response.total_found, 3);
//! for candidate in &response.results {
//!     println!("{} {} {}", candidate.word, candidate.score, candidate.used_jokers);
//! }
//!
//! // Words that start with the M on the board, with 4 letters
//! let filters = Filters::new()
//!     .with_board_pattern("m*")
//!     .with_length(LengthFilter::Exact { exact_length: 4 })
//!     .with_sort(SortBy::Length);
//! let response = finder.search("dan", &filters)?;
//! assert_eq!(response.results[0].word, "MAND");
//! # Ok::<(), ordfinder::Error>(())
//! ```
//!
//! # Board patterns
//! A board pattern is matched against the whole word:
//! - a letter matches that letter,
//! - `.` matches exactly one letter,
//! - `*` matches any number of letters, including none.
//!
//! Whitespace is ignored. Letters in the pattern are on the board, so they do not have to come
//! from the rack. A pattern that can not be compiled matches no word.
//!
//! # Features
//! - `rayon` (default): scan the dictionary in parallel.
//! - `serde`: serialize requests, filters and responses.
//! - `bincode`: save and load a prepared dictionary.
//!
//! # Running searches off the calling thread
//! A [`Worker`] runs searches on a background thread; an [`Engine`] falls back to the calling
//! thread when the worker is not available. Results are the same either way.
pub mod codec;
mod dictionary;
mod error;
mod filters;
mod finder;
pub mod formable;
mod labelset;
mod pattern;
pub mod rack;
mod ranker;
pub mod score;
pub mod search;
mod tilebag;
mod tilesets;
mod worker;

pub use codec::{Codec, Label, Labels};
pub use dictionary::{Dictionary, Entry};
pub use error::Error;
pub use filters::{Filters, LengthFilter};
pub use finder::Finder;
pub use formable::Fit;
pub use labelset::LabelSet;
pub use pattern::{Highlight, Pattern};
pub use rack::Rack;
pub use ranker::SortBy;
pub use search::{Candidate, SearchRequest, SearchResponse};
pub use tilebag::TileBag;
pub use tilesets::{Language, TileSet};
pub use worker::{Engine, Worker};
