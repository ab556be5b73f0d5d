use crate::ranker::SortBy;
use crate::Error;

/// Shortest word that can be played
pub const MIN_WORD_LEN: usize = 2;

/// Longest word that can be played
pub const MAX_WORD_LEN: usize = crate::codec::MAX_WORD_LEN;

/// Restriction on the length of found words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "lengthMode", rename_all = "lowercase")
)]
pub enum LengthFilter {
    /// Any length from 2 to 15
    #[default]
    All,
    /// Exactly `exact_length` letters
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Exact { exact_length: usize },
    /// From `min_length` to `max_length` letters, inclusive
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Range {
        min_length: usize,
        max_length: usize,
    },
}

fn check_bound(len: usize) -> Result<(), Error> {
    if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
        Ok(())
    } else {
        Err(Error::LengthOutOfRange(len))
    }
}

impl LengthFilter {
    /// Check the configured lengths.
    /// ## Errors
    /// - If a length is outside 2..=15.
    /// - If the minimum length is larger than the maximum length.
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            LengthFilter::All => Ok(()),
            LengthFilter::Exact { exact_length } => check_bound(exact_length),
            LengthFilter::Range {
                min_length,
                max_length,
            } => {
                check_bound(min_length)?;
                check_bound(max_length)?;
                if min_length > max_length {
                    return Err(Error::InvalidLengthRange {
                        min: min_length,
                        max: max_length,
                    });
                }
                Ok(())
            }
        }
    }

    /// Return true if a word with `len` letters passes the filter.
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            LengthFilter::All => (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len),
            LengthFilter::Exact { exact_length } => len == exact_length,
            LengthFilter::Range {
                min_length,
                max_length,
            } => (min_length..=max_length).contains(&len),
        }
    }
}

/// Filters and sort order for a search.
/// ## Examples
/// ```
/// use ordfinder::{Filters, LengthFilter, SortBy};
/// let filters = Filters::new()
///     .with_board_pattern("m*")
///     .with_length(LengthFilter::Range { min_length: 3, max_length: 6 })
///     .with_sort(SortBy::Alpha);
/// assert!(filters.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "RawFilters")
)]
pub struct Filters {
    /// The board pattern. A blank pattern is no pattern.
    pub board_pattern: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub length: LengthFilter,
    pub sort_by: SortBy,
}

/// Filters as received from a host: every field may be missing, and the length bounds are
/// only read for their own `lengthMode`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilters {
    board_pattern: Option<String>,
    length_mode: Option<String>,
    exact_length: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    #[serde(default)]
    sort_by: SortBy,
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<RawFilters> for Filters {
    type Error = String;

    /// A missing `lengthMode` is `all`; missing range bounds are 2 and 15.
    fn try_from(raw: RawFilters) -> Result<Self, Self::Error> {
        let mode = raw.length_mode.as_deref().map(str::trim);
        let length = match mode.map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("all") => LengthFilter::All,
            Some("exact") => LengthFilter::Exact {
                exact_length: raw
                    .exact_length
                    .ok_or_else(|| String::from("lengthMode \"exact\" needs exactLength"))?,
            },
            Some("range") => LengthFilter::Range {
                min_length: raw.min_length.unwrap_or(MIN_WORD_LEN),
                max_length: raw.max_length.unwrap_or(MAX_WORD_LEN),
            },
            Some(other) => return Err(format!("unknown lengthMode \"{}\"", other)),
        };
        Ok(Filters {
            board_pattern: raw.board_pattern,
            length,
            sort_by: raw.sort_by,
        })
    }
}

impl Filters {
    pub fn new() -> Filters {
        Filters::default()
    }

    pub fn with_board_pattern(mut self, pattern: &str) -> Filters {
        self.board_pattern = Some(String::from(pattern));
        self
    }

    pub fn with_length(mut self, length: LengthFilter) -> Filters {
        self.length = length;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Filters {
        self.sort_by = sort_by;
        self
    }

    /// The board pattern, if it is not blank.
    pub fn board_pattern(&self) -> Option<&str> {
        self.board_pattern
            .as_deref()
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
    }

    /// Check the filter configuration.
    /// ## Errors
    /// See [`LengthFilter::validate`].
    pub fn validate(&self) -> Result<(), Error> {
        self.length.validate()
    }
}
