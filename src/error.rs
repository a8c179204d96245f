use thiserror::Error;

pub type Result<T> = std::result::Result<T, FootnoteError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FootnoteError {
    /// DPV footnotes come in 2-character pairs, so an odd length cannot be split.
    #[error("malformed DPV footnotes {input:?}: length {len} is not even")]
    MalformedInput { input: String, len: usize },

    #[error("unknown DPV match code: {0:?}")]
    UnknownMatchCode(String),

    #[error("unexpected Y/N flag value: {0:?}")]
    UnknownFlag(String),

    #[error("invalid value {value:?} for `{name}`")]
    InvalidSetting { name: &'static str, value: String },
}
