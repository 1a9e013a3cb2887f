// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Shared helpers for generated tagged-union bodies.
//!
//! A union itself is just a tag read (via [`crate::restrict::parse_enum`] for
//! a closed-set tag) followed by a `match` into per-arm field parsing, so
//! this module only needs to cover the two things every arm shares: a
//! length-framed union bounds each arm to a sub-cursor and rewrites the
//! frame's length to the arm's *actual* encoded size rather than trusting a
//! stored value, and a default arm absorbs whatever bytes remain instead of
//! parsing them as fields.

use crate::cursor::Reader;
use crate::error::{ParseError, Reason};

/// Consumes and returns every remaining byte in `r`. Used by a union's
/// default arm, which stores unrecognized-tag payloads verbatim instead of
/// interpreting them as fields.
pub fn absorb_remainder<'a>(r: &mut Reader<'a>) -> &'a [u8] {
    let rest = r.remaining_bytes();
    r.skip(rest.len()).unwrap_or_else(|_| unreachable!());
    rest
}

/// Confirms a non-default arm consumed its entire length frame; a
/// length-framed union's known arms may not leave unread bytes inside their
/// own frame (unlike the default arm, which absorbs them by design).
pub fn require_exhausted(r: &Reader<'_>) -> Result<(), ParseError> {
    if r.remaining() != 0 {
        return Err(ParseError::Malformed(Reason::TrailingData));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_remainder_takes_everything_left() {
        let buf = [1u8, 2, 3];
        let mut r = Reader::new(&buf);
        r.skip(1).unwrap();
        assert_eq!(absorb_remainder(&mut r), &[2, 3]);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn require_exhausted_passes_when_empty() {
        let buf: [u8; 0] = [];
        let r = Reader::new(&buf);
        assert_eq!(require_exhausted(&r), Ok(()));
    }

    #[test]
    fn require_exhausted_fails_with_leftover_bytes() {
        let buf = [0u8; 1];
        let r = Reader::new(&buf);
        assert_eq!(
            require_exhausted(&r),
            Err(ParseError::Malformed(Reason::TrailingData))
        );
    }
}
