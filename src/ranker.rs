use crate::codec::Codec;
use crate::search::Candidate;
use std::cmp::Ordering;

/// The order of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", from = "String")
)]
pub enum SortBy {
    /// Highest score first, then fewest wildcards, then most points per letter.
    #[default]
    Score,
    /// Longest word first, then highest score.
    Length,
    /// Alphabet order.
    Alpha,
}

/// Unrecognized names sort by score.
impl From<&str> for SortBy {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "length" => SortBy::Length,
            "alpha" => SortBy::Alpha,
            _ => SortBy::Score,
        }
    }
}

impl From<String> for SortBy {
    fn from(name: String) -> Self {
        SortBy::from(name.as_str())
    }
}

/// Compare points per letter of `a` and `b`, highest first.
fn by_ratio(a: &Candidate, b: &Candidate) -> Ordering {
    // a.score / a.length > b.score / b.length, without division
    let lhs = u64::from(a.score) * b.length as u64;
    let rhs = u64::from(b.score) * a.length as u64;
    rhs.cmp(&lhs)
}

/// Compare two results for `sort_by`. Results that tie on all keys are put in alphabet order,
/// so the order is total.
pub fn compare(a: &Candidate, b: &Candidate, sort_by: SortBy, codec: &Codec) -> Ordering {
    let alpha = || codec.compare(&a.word, &b.word);
    match sort_by {
        SortBy::Score => b
            .score
            .cmp(&a.score)
            .then_with(|| a.used_jokers.cmp(&b.used_jokers))
            .then_with(|| by_ratio(a, b))
            .then_with(alpha),
        SortBy::Length => b
            .length
            .cmp(&a.length)
            .then_with(|| b.score.cmp(&a.score))
            .then_with(alpha),
        SortBy::Alpha => alpha(),
    }
}

/// Sort `results` in place.
pub fn sort(results: &mut [Candidate], sort_by: SortBy, codec: &Codec) {
    results.sort_by(|a, b| compare(a, b, sort_by, codec));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::danish;

    fn candidate(word: &str, score: u32, used_jokers: usize) -> Candidate {
        Candidate {
            word: String::from(word),
            score,
            length: word.chars().count(),
            used_jokers,
        }
    }

    fn sorted(results: &[Candidate], sort_by: SortBy) -> Vec<String> {
        let mut results = results.to_vec();
        sort(&mut results, sort_by, danish());
        results.into_iter().map(|c| c.word).collect()
    }

    #[test]
    fn test_sort_by_score() {
        let results = &[
            candidate("ABE", 5, 0),
            candidate("KAT", 7, 0),
            candidate("KATTE", 8, 1),
            candidate("ÆG", 7, 1),
            candidate("BIL", 7, 0),
            candidate("OST", 6, 0),
        ];
        // KAT and BIL tie on everything but the word
        assert_eq!(
            sorted(results, SortBy::Score),
            vec!["KATTE", "BIL", "KAT", "ÆG", "OST", "ABE"]
        );
    }

    #[test]
    fn test_sort_by_score_ratio() {
        // equal score and wildcards: fewer letters for the same points wins
        let results = &[candidate("TRÆON", 10, 0), candidate("ZEB", 10, 0)];
        assert_eq!(sorted(results, SortBy::Score), vec!["ZEB", "TRÆON"]);
    }

    #[test]
    fn test_sort_by_length() {
        let results = &[
            candidate("ABE", 5, 0),
            candidate("KATTE", 8, 1),
            candidate("ØL", 6, 0),
            candidate("BIL", 7, 0),
        ];
        assert_eq!(
            sorted(results, SortBy::Length),
            vec!["KATTE", "BIL", "ABE", "ØL"]
        );
    }

    #[test]
    fn test_sort_alpha() {
        let results = &[
            candidate("ÅL", 6, 0),
            candidate("ÅBEN", 9, 0),
            candidate("ABE", 5, 0),
            candidate("ØL", 6, 0),
            candidate("ZOO", 13, 0),
            candidate("AB", 4, 0),
        ];
        assert_eq!(
            sorted(results, SortBy::Alpha),
            vec!["AB", "ABE", "ZOO", "ØL", "ÅBEN", "ÅL"]
        );
    }

    #[test]
    fn test_sort_by_name() {
        assert_eq!(SortBy::from("score"), SortBy::Score);
        assert_eq!(SortBy::from("length"), SortBy::Length);
        assert_eq!(SortBy::from("Alpha"), SortBy::Alpha);
        assert_eq!(SortBy::from("random"), SortBy::Score);
        assert_eq!(SortBy::from(""), SortBy::Score);
        assert_eq!(SortBy::default(), SortBy::Score);
    }
}
