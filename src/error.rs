// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! The parse/encode result taxonomy.
//!
//! The runtime this is modeled on returns a single `ssize_t` from every
//! parse/encode call: a non-negative count of bytes consumed or produced, or
//! one of two negative sentinels — "truncated, try again with more input or
//! a bigger buffer" and "malformed, this input can never parse". Collapsing
//! those two failure cases into one `Result::Err` would lose the distinction
//! callers rely on (a stream reader retries on the first, gives up on the
//! second), so each of [`ParseError`] and [`EncodeError`] keeps it as two
//! variants instead.

use core::fmt;

/// Why a parse or encode failed for reasons other than "not enough bytes".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Reason {
    /// Allocation failed while building or growing a container.
    OutOfMemory,
    /// A union's tag value matched no known arm and the union has no default
    /// arm to fall back on.
    UnknownTag(u32),
    /// A length-framed field's declared length didn't match what its framing
    /// context said it should be.
    LengthMismatch { expected: usize, actual: usize },
    /// A restricted scalar's value fell outside its closed set or range.
    RestrictedValue,
    /// A nul-terminated string field's content contains an embedded NUL,
    /// which would make the encoded bytes not round-trip back to this
    /// content on parse.
    EmbeddedNul,
    /// A context-dependent field's context didn't supply the value this
    /// field's framing requires.
    ContextMismatch,
    /// The message carries a sticky error flag set by an earlier failed
    /// mutation, so it refused to encode.
    HasDeferredError,
    /// A length-framed union arm left unconsumed bytes inside its frame.
    TrailingData,
    /// A length-framed union arm ran out of its length frame before it
    /// finished parsing. The frame already fixed how many bytes the arm
    /// gets, so this can never be fixed by supplying more input.
    FrameExhausted,
    /// Two or more fields of the same message disagree (e.g. a presence
    /// flag says a sub-message should or shouldn't be there, and it is or
    /// isn't).
    InconsistentFields,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "allocation failed"),
            Self::UnknownTag(tag) => write!(f, "unrecognized tag {tag}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
            Self::RestrictedValue => write!(f, "value outside restricted set"),
            Self::EmbeddedNul => write!(f, "embedded NUL in string content"),
            Self::ContextMismatch => write!(f, "context does not supply required value"),
            Self::HasDeferredError => write!(f, "message carries a deferred error"),
            Self::TrailingData => write!(f, "trailing data inside a length-framed union arm"),
            Self::FrameExhausted => write!(f, "arm ran out of its length frame before finishing"),
            Self::InconsistentFields => write!(f, "fields disagree with one another"),
        }
    }
}

/// The outcome of a failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended before this value could be fully parsed; supplying
    /// more bytes may allow the same parse to succeed.
    Truncated,
    /// The input can never parse as this type, regardless of how many more
    /// bytes are supplied.
    Malformed(Reason),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "truncated input"),
            Self::Malformed(reason) => write!(f, "malformed input: {reason}"),
        }
    }
}

impl core::error::Error for ParseError {}

/// The outcome of a failed encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The output buffer is too small; supplying a bigger one may allow the
    /// same encode to succeed.
    Truncated,
    /// This message can never encode, regardless of buffer size.
    Malformed(Reason),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "output buffer too small"),
            Self::Malformed(reason) => write!(f, "cannot encode: {reason}"),
        }
    }
}

impl core::error::Error for EncodeError {}

impl From<crate::core_compat::alloc::AllocError> for ParseError {
    fn from(_: crate::core_compat::alloc::AllocError) -> Self {
        Self::Malformed(Reason::OutOfMemory)
    }
}

impl From<crate::core_compat::alloc::AllocError> for EncodeError {
    fn from(_: crate::core_compat::alloc::AllocError) -> Self {
        Self::Malformed(Reason::OutOfMemory)
    }
}
