use log::debug;
use crate::error::{FootnoteError, Result};

pub mod model;

pub use model::{analysis_warnings, dpv_messages, AnalysisFootnote, DpvFootnote};

const DELIMITER: char = '#';

/// How the `#` separating analysis footnotes is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FootnoteDelimiter {
    /// `"A#B#"` -> `["A", "B"]`
    #[default]
    Stripped,
    /// `"A#B#C"` -> `["A#", "B#", "C"]`, the closing delimiter stays on each token
    Attached,
}

/// Split a DPV footnote string into its 2-character codes.
///
/// Codes are not checked against the known set.
pub fn decode_dpv_footnotes(source: Option<&str>) -> Result<Vec<DpvFootnote>> {
    let source = match source {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(Vec::new()),
    };

    let chars = source.chars().collect::<Vec<_>>();
    if chars.len() % 2 != 0 {
        return Err(FootnoteError::MalformedInput {
            input: source.to_string(),
            len: chars.len(),
        });
    }

    let footnotes = chars.chunks(2)
        .map(|pair| DpvFootnote::new(pair.iter().collect()))
        .collect::<Vec<_>>();
    debug!("decoded [{}] DPV footnotes from [{}]", footnotes.len(), source);
    Ok(footnotes)
}

/// Split an analysis footnote string on `#`, dropping empty segments.
pub fn decode_analysis_footnotes(source: Option<&str>) -> Vec<AnalysisFootnote> {
    decode_analysis_footnotes_with(source, FootnoteDelimiter::default())
}

pub fn decode_analysis_footnotes_with(source: Option<&str>, delimiter: FootnoteDelimiter) -> Vec<AnalysisFootnote> {
    let Some(source) = source else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in source.chars() {
        if ch == DELIMITER {
            if !current.is_empty() {
                if delimiter == FootnoteDelimiter::Attached {
                    current.push(DELIMITER);
                }
                segments.push(AnalysisFootnote::new(std::mem::take(&mut current)));
            }
        } else {
            current.push(ch);
        }
    }
    // last segment without a closing delimiter
    if !current.is_empty() {
        segments.push(AnalysisFootnote::new(current));
    }
    segments
}
