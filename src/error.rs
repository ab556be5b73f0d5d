use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Raw rack or pattern input longer than 50 characters
    #[error("Input is too long: {0} characters (max 50)")]
    InputTooLong(usize),

    /// Raw input contains a character that is neither a letter nor a wildcard
    #[error("Invalid character '{0}' in input")]
    InvalidCharacter(char),

    /// The normalized rack holds more than 15 characters
    #[error("Rack is too long: {0} characters (max 15)")]
    RackTooLong(usize),

    /// The string is longer than 15 letters
    #[error("Encoder: string too long {0}")]
    EncodeStringTooLong(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(char),

    /// Board pattern longer than 50 characters
    #[error("Pattern is too long: {0} characters (max 50)")]
    PatternTooLong(usize),

    /// Board pattern with more than 15 `.` or `*` symbols
    #[error("Pattern has too many wildcards: {0} (max 15)")]
    PatternTooManyWildcards(usize),

    /// Board pattern contains a symbol that is not a letter, `.`, `*` or space
    #[error("Invalid pattern token '{0}'")]
    PatternInvalidToken(char),

    /// A configured word length outside 2..=15
    #[error("Word length {0} is out of range (expect 2..=15)")]
    LengthOutOfRange(usize),

    /// Minimum word length larger than maximum
    #[error("Invalid length range: min {min} > max {max}")]
    InvalidLengthRange { min: usize, max: usize },

    /// The search worker thread could not be started
    #[error("Search worker could not be started")]
    WorkerSpawn(#[source] std::io::Error),

    /// The search worker thread is gone
    #[error("Search worker disconnected")]
    WorkerDisconnected,
}

impl Error {
    /// Check if the error is a validation failure of user input (rack, pattern or filters),
    /// as opposed to a failure loading a wordfile or running the worker.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InputTooLong(_)
                | Error::InvalidCharacter(_)
                | Error::RackTooLong(_)
                | Error::EncodeStringTooLong(_)
                | Error::EncodeInvalidToken(_)
                | Error::PatternTooLong(_)
                | Error::PatternTooManyWildcards(_)
                | Error::PatternInvalidToken(_)
                | Error::LengthOutOfRange(_)
                | Error::InvalidLengthRange { .. }
        )
    }
}
