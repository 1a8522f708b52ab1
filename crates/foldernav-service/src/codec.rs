//! Ancestor chain ⇄ path token codec.
//!
//! A token is the chain's ids joined with `-`, encoded as URL-safe base64
//! without padding, so it can sit in a URL fragment untouched. Tokens made
//! by the older encoder (standard alphabet, padded) still decode.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use thiserror::Error;

use foldernav_core::error::{AppError, ErrorKind};
use foldernav_core::types::id::FolderId;

/// Separator between ids inside the decoded payload.
pub const SEPARATOR: &str = "-";

/// Reasons a token is rejected. Decoding never yields a partial chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token was empty.
    #[error("path token is empty")]
    Empty,
    /// The token is not valid base64.
    #[error("path token is not valid base64")]
    InvalidEncoding,
    /// The decoded payload is not UTF-8.
    #[error("path token payload is not UTF-8")]
    InvalidUtf8,
    /// A separator was leading, trailing, or doubled.
    #[error("empty segment at position {position}")]
    EmptySegment {
        /// Zero-based segment position.
        position: usize,
    },
    /// A segment contains something other than ASCII digits.
    #[error("segment '{segment}' is not a folder id")]
    InvalidSegment {
        /// The offending segment.
        segment: String,
    },
    /// A segment does not fit a folder id.
    #[error("segment '{segment}' overflows a folder id")]
    Overflow {
        /// The offending segment.
        segment: String,
    },
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::with_source(ErrorKind::Decode, format!("Invalid path token: {err}"), err)
    }
}

/// Encode an ancestor chain into a path token.
///
/// Deterministic and uncapped. An empty chain yields an empty token, which
/// [`decode`] rejects.
pub fn encode(chain: &[FolderId]) -> String {
    let payload = chain
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    URL_SAFE_NO_PAD.encode(payload)
}

/// Decode a path token back into the exact chain it was made from.
pub fn decode(token: &str) -> Result<Vec<FolderId>, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .map_err(|_| DecodeError::InvalidEncoding)?;
    let payload = String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;

    parse_payload(&payload)
}

fn parse_payload(payload: &str) -> Result<Vec<FolderId>, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }

    payload
        .split(SEPARATOR)
        .enumerate()
        .map(|(position, segment)| {
            if segment.is_empty() {
                return Err(DecodeError::EmptySegment { position });
            }
            if !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DecodeError::InvalidSegment {
                    segment: segment.to_string(),
                });
            }
            segment
                .parse::<u64>()
                .map(FolderId)
                .map_err(|_| DecodeError::Overflow {
                    segment: segment.to_string(),
                })
        })
        .collect()
}
