// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Position-marker fields: zero-wire-byte fields that record where the
//! cursor sat when they were reached, rather than reading or writing
//! anything themselves.
//!
//! A generated `parse` body captures one of these between two other fields
//! to let callers recover, say, "the offset where the payload started" after
//! the fact. `encode` re-captures the same way against the write cursor, so a
//! round-tripped message carries a position consistent with its own
//! newly-encoded bytes rather than a stale value copied from the message it
//! was parsed from.

use crate::cursor::{Reader, Writer};

/// A captured cursor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// Captures the reader's current offset.
    pub fn capture(r: &Reader<'_>) -> Self {
        Self(r.offset())
    }

    /// Captures the writer's current offset.
    pub fn capture_write(w: &Writer<'_>) -> Self {
        Self(w.offset())
    }

    /// The captured offset.
    pub fn offset(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_reader_offset_mid_parse() {
        let buf = [0u8; 8];
        let mut r = Reader::new(&buf);
        r.skip(3).unwrap();
        assert_eq!(Position::capture(&r).offset(), 3);
    }

    #[test]
    fn captures_writer_offset_mid_encode() {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        w.write_u32(0).unwrap();
        assert_eq!(Position::capture_write(&w).offset(), 4);
    }
}
