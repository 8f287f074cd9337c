//! The `#<type>:<payload>` token grammar.
//!
//! A token is an ordinary JSON string that carries a typed value through the
//! base format:
//!
//! ```text
//! token      := "#" type-name ":" payload
//! type-name  := one or more characters excluding ":"
//! payload    := zero or more characters (may itself look like a token)
//! ```
//!
//! A candidate string is a syntactic token iff it is at least 3 bytes long,
//! starts with `#`, and contains a `:` after at least one type-name
//! character. Anything else is a plain string with no tag.
//!
//! ```rust
//! use tagson::parse_token;
//!
//! let token = parse_token("#BigInt:123456");
//! assert_eq!(token.tag, Some("BigInt"));
//! assert_eq!(token.payload, "123456");
//!
//! let plain = parse_token("BigInt:123456");
//! assert_eq!(plain.tag, None);
//! assert_eq!(plain.payload, "BigInt:123456");
//! ```

/// The result of parsing a candidate token string.
///
/// Borrowed from the candidate; recomputed on every decode attempt and never
/// persisted. When `tag` is `None` the candidate failed the grammar and
/// `payload` is the whole input unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The declared type name, or `None` if the candidate is not a token.
    pub tag: Option<&'a str>,
    /// The payload after the first `:`, or the whole candidate when untagged.
    pub payload: &'a str,
}

impl<'a> Token<'a> {
    /// Returns `true` if the candidate parsed as a syntactic token.
    #[inline]
    #[must_use]
    pub const fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }

    #[inline]
    const fn untagged(candidate: &'a str) -> Self {
        Token {
            tag: None,
            payload: candidate,
        }
    }
}

/// Parses a candidate string against the token grammar.
///
/// Never fails: a candidate that is not a syntactic token comes back with
/// `tag: None` and the input as its payload. An empty type name (`"#:..."`)
/// does not satisfy the grammar.
///
/// # Examples
///
/// ```rust
/// use tagson::parse_token;
///
/// assert_eq!(parse_token("#:").tag, None);              // too short
/// assert_eq!(parse_token("BigInt:123").tag, None);      // no leading '#'
/// assert_eq!(parse_token("#BigInt.123").tag, None);     // no ':'
/// assert_eq!(parse_token("#BigInt:123").tag, Some("BigInt"));
/// ```
#[must_use]
pub fn parse_token(candidate: &str) -> Token<'_> {
    if candidate.len() < 3 || !candidate.starts_with('#') {
        return Token::untagged(candidate);
    }
    match candidate.find(':') {
        // The type name spans bytes 1..idx and must be non-empty.
        Some(idx) if idx > 1 => Token {
            tag: Some(&candidate[1..idx]),
            payload: &candidate[idx + 1..],
        },
        _ => Token::untagged(candidate),
    }
}

/// Formats a full token from a type name and payload.
#[must_use]
pub fn format_token(tag: &str, payload: &str) -> String {
    format!("#{tag}:{payload}")
}
