use crate::codec::{Codec, Label};

mod da;

/// These languages are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Danish
    DA,
}

impl Default for Language {
    fn default() -> Self {
        Language::DA
    }
}

/// letter, points
type TileInfo = (char, u32);

/// A tileset for `wordfeud`. It contains the letter values for a supported language,
/// and a codec to translate between words and labels.
#[derive(Debug, Clone)]
pub struct TileSet {
    language: Language,
    tiles: &'static [TileInfo],
    codec: Codec,
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet::new(Language::default())
    }
}

impl TileSet {
    /// Return a new `TileSet` for language.
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::DA => da::TILESET,
        };
        // get additional letters past A..Z
        let extended: Vec<char> = tiles[27..].iter().map(|&tile| tile.0).collect();
        let codec = Codec::new(&extended);
        TileSet {
            language,
            tiles,
            codec,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the points for label, or 0 if not found
    pub fn points(&self, label: Label) -> u32 {
        if let Some(&tile) = self.tiles.get(label as usize) {
            return tile.1;
        }
        0
    }

    /// Return the letter for label, or `?` if not found
    pub fn label(&self, label: Label) -> char {
        if let Some(&tile) = self.tiles.get(label as usize) {
            return tile.0;
        }
        '?'
    }

    /// Return the sum of the letter points of `word`, without any wildcards.
    /// ## Examples
    /// ```
    /// # use ordfinder::{Error, TileSet};
    /// let tileset = TileSet::default();
    /// let word = tileset.codec().encode("træ")?;
    /// assert_eq!(tileset.word_points(&word), 7);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn word_points(&self, word: &[Label]) -> u32 {
        word.iter().map(|&label| self.points(label)).sum()
    }

    /// Return the codec for this language
    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}
