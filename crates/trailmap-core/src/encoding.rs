//! PlantUML link encoding.
//!
//! A PlantUML server reconstructs a diagram from a URL path segment holding
//! the diagram source compressed with raw DEFLATE and written in a 64-symbol,
//! URL-safe alphabet. This module produces that segment ([`encode`]) and
//! reverses it ([`decode`]).
//!
//! The encoding steps are:
//!
//! 1. take the UTF-8 bytes of the source,
//! 2. compress them as a zlib stream,
//! 3. drop the 2-byte zlib header and the 4-byte Adler-32 trailer,
//! 4. write the remaining raw DEFLATE payload six bits at a time, most
//!    significant bits first, zero-filling the last group.
//!
//! # Example
//!
//! ```
//! use trailmap_core::encoding::{decode, encode};
//!
//! let token = encode("@startuml\nAlice -> Bob\n@enduml").unwrap();
//! assert_eq!(token.as_str(), "SoWkIImgAStDuNBCoKnELT2rKt3AJ-9oICrB0Ge200");
//! assert_eq!(decode(token.as_str()).unwrap(), "@startuml\nAlice -> Bob\n@enduml");
//! ```

use std::{
    fmt,
    io::{self, Read, Write},
    string::{FromUtf8Error, FromUtf16Error},
};

use flate2::{Compression, read::DeflateDecoder, write::ZlibEncoder};
use log::trace;
use thiserror::Error;

/// Symbols of the PlantUML alphabet, indexed by 6-bit value.
pub const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

const ZLIB_HEADER_LEN: usize = 2;
const ZLIB_TRAILER_LEN: usize = 4;

/// Errors raised while encoding a diagram source.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Diagram source is not valid text: {0}")]
    InvalidText(#[from] FromUtf16Error),

    #[error("Compression failed: {0}")]
    Compression(#[from] io::Error),
}

/// Errors raised while decoding a token back into diagram source.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Inflate failed: {0}")]
    Inflate(#[from] io::Error),

    #[error("Decoded diagram is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Diagram description markup handed to the encoder.
///
/// The content is opaque: nothing here looks at PlantUML syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramSource(String);

impl DiagramSource {
    /// Creates a source from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a source from UTF-16 code units.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidText`] if `units` contains an unpaired
    /// surrogate and therefore has no byte representation.
    pub fn from_utf16(units: &[u16]) -> Result<Self, EncodeError> {
        Ok(Self(String::from_utf16(units)?))
    }

    /// Returns the source text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DiagramSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DiagramSource {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DiagramSource {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// URL-safe token understood by a PlantUML server.
///
/// Only contains symbols from [`ALPHABET`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedToken(String);

impl EncodedToken {
    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of symbols in the token.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the token has no symbols.
    ///
    /// Tokens produced by [`encode`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the full image URL for this token.
    ///
    /// # Arguments
    ///
    /// * `server` - Base URL of the PlantUML server, e.g. `http://www.plantuml.com/plantuml`
    /// * `format` - Output format path segment, e.g. `png` or `svg`
    ///
    /// # Examples
    ///
    /// ```
    /// use trailmap_core::encoding::encode;
    ///
    /// let token = encode("@startuml\nAlice -> Bob\n@enduml").unwrap();
    /// let url = token.to_url("http://www.plantuml.com/plantuml/", "png");
    /// assert_eq!(
    ///     url,
    ///     "http://www.plantuml.com/plantuml/png/SoWkIImgAStDuNBCoKnELT2rKt3AJ-9oICrB0Ge200"
    /// );
    /// ```
    pub fn to_url(&self, server: &str, format: &str) -> String {
        format!("{}/{}/{}", server.trim_end_matches('/'), format, self.0)
    }
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EncodedToken> for String {
    fn from(token: EncodedToken) -> Self {
        token.0
    }
}

/// Encodes diagram source into a PlantUML URL token.
///
/// Deterministic: the same source always yields the same token.
///
/// # Errors
///
/// Returns [`EncodeError::Compression`] if the compressor fails.
pub fn encode(source: impl AsRef<str>) -> Result<EncodedToken, EncodeError> {
    let bytes = source.as_ref().as_bytes();
    let payload = deflate_raw(bytes)?;
    let token = encode64(&payload);

    trace!(
        source_len = bytes.len(),
        payload_len = payload.len(),
        token_len = token.len();
        "Encoded diagram source"
    );

    Ok(EncodedToken(token))
}

/// Decodes a PlantUML URL token back into diagram source.
///
/// # Errors
///
/// Returns [`DecodeError`] if the token holds a symbol outside [`ALPHABET`],
/// the payload is not valid raw DEFLATE, or the inflated bytes are not UTF-8.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let payload = decode64(token)?;
    let bytes = inflate_raw(&payload)?;
    Ok(String::from_utf8(bytes)?)
}

/// Number of symbols needed for `payload_len` bytes.
pub fn encoded_len(payload_len: usize) -> usize {
    (payload_len * 8).div_ceil(6)
}

/// Compresses `bytes` as zlib and strips the container framing.
pub fn deflate_raw(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(bytes.len() / 2 + 16),
        Compression::default(),
    );
    encoder.write_all(bytes)?;
    let stream = encoder.finish()?;

    // A zlib stream always holds the header, at least one block, and the trailer.
    if stream.len() < ZLIB_HEADER_LEN + ZLIB_TRAILER_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "zlib stream shorter than its framing",
        ));
    }

    Ok(stream[ZLIB_HEADER_LEN..stream.len() - ZLIB_TRAILER_LEN].to_vec())
}

fn inflate_raw(payload: &[u8]) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(payload.len() * 2);
    DeflateDecoder::new(payload).read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn encode64(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 6 {
            bits -= 6;
            out.push(symbol((buffer >> bits) & 0x3F));
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(symbol((buffer << (6 - bits)) & 0x3F));
    }

    out
}

fn decode64(token: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(token.len() * 6 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, symbol) in token.chars().enumerate() {
        let value =
            symbol_value(symbol).ok_or(DecodeError::InvalidSymbol { symbol, position })?;
        buffer = (buffer << 6) | value;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push(((buffer >> bits) & 0xFF) as u8);
        }
        buffer &= (1 << bits) - 1;
    }

    // Leftover bits are the zero fill of the final group.
    Ok(out)
}

fn symbol(value: u32) -> char {
    char::from(ALPHABET[value as usize])
}

fn symbol_value(symbol: char) -> Option<u32> {
    let value = match symbol {
        '0'..='9' => symbol as u32 - '0' as u32,
        'A'..='Z' => symbol as u32 - 'A' as u32 + 10,
        'a'..='z' => symbol as u32 - 'a' as u32 + 36,
        '-' => 62,
        '_' => 63,
        _ => return None,
    };
    Some(value)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_alphabet(source: &str) -> Result<(), TestCaseError> {
        let token = encode(source).unwrap();
        for symbol in token.as_str().bytes() {
            prop_assert!(ALPHABET.contains(&symbol), "symbol {symbol:#x} outside alphabet");
        }
        Ok(())
    }

    fn check_length(source: &str) -> Result<(), TestCaseError> {
        let payload = deflate_raw(source.as_bytes()).unwrap();
        let token = encode(source).unwrap();
        prop_assert_eq!(token.len(), encoded_len(payload.len()));
        Ok(())
    }

    fn check_round_trip(source: &str) -> Result<(), TestCaseError> {
        let token = encode(source).unwrap();
        prop_assert_eq!(decode(token.as_str()).unwrap(), source);
        Ok(())
    }

    proptest! {
        #[test]
        fn token_uses_only_alphabet(source in any::<String>()) {
            check_alphabet(&source)?;
        }

        #[test]
        fn token_length_matches_payload(source in any::<String>()) {
            check_length(&source)?;
        }

        #[test]
        fn token_round_trips(source in any::<String>()) {
            check_round_trip(&source)?;
        }

        #[test]
        fn diagram_like_sources_round_trip(source in "@startuml\n[a-zA-Z >:;\n-]{0,200}\n@enduml") {
            check_round_trip(&source)?;
        }

        #[test]
        fn encode_is_deterministic(source in any::<String>()) {
            prop_assert_eq!(encode(&source).unwrap(), encode(&source).unwrap());
        }
    }
}
