// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A message combining a fixed-length byte array with a nul-terminated
//! string, and the deferred-error model a setter that can fail uses.

use crate::core_compat::alloc::{Allocator, Global};
use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError, Reason};
use crate::fixed;
use crate::message::{ErrorFlag, Message};
use crate::string::Str;

const TAG_LEN: usize = 10;

/// A fixed 10-byte tag followed by a nul-terminated name.
pub struct Labeled<A: Allocator + Clone = Global> {
    tag: [u8; TAG_LEN],
    name: Str<A>,
    errors: ErrorFlag,
}

impl<A: Allocator + Clone> Labeled<A> {
    /// Creates an empty labeled record using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        Self {
            tag: [0; TAG_LEN],
            name: Str::new_in(alloc),
            errors: ErrorFlag::default(),
        }
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: [u8; TAG_LEN]) {
        self.tag = tag;
    }

    pub fn name(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Sets the name. If allocation fails partway through, the error is
    /// recorded on the message's deferred error flag rather than returned
    /// here, matching the setter signature a generated accessor has.
    pub fn set_name(&mut self, name: &[u8]) {
        if self.name.set_bytes(name).is_err() {
            self.errors.set();
        }
    }
}

impl<A: Allocator + Clone + Default> Message for Labeled<A> {
    fn parse(r: &mut Reader<'_>) -> Result<Self, ParseError> {
        Self::parse_in(r, A::default())
    }

    fn encode(&mut self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        self.errors.check_before_encode()?;
        let start = w.offset();
        fixed::write_bytes(w, &self.tag)?;
        let with_nul = self.name.c_str()?;
        w.write_bytes(with_nul)?;
        Ok(w.offset() - start)
    }

    fn check(&self) -> Option<Reason> {
        if self.errors.is_set() {
            Some(Reason::HasDeferredError)
        } else {
            None
        }
    }

    fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

impl<A: Allocator + Clone> Labeled<A> {
    /// Parses a `Labeled` using the given allocator for its string content.
    pub fn parse_in(r: &mut Reader<'_>, alloc: A) -> Result<Self, ParseError> {
        let tag = fixed::read_bytes::<TAG_LEN>(r)?;
        let content = r.read_until_nul()?;
        let mut name = Str::new_in(alloc);
        name.set_bytes(content)?;
        Ok(Self {
            tag,
            name,
            errors: ErrorFlag::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let mut msg = Labeled::new_in(Global);
        msg.set_tag(*b"0123456789");
        msg.set_name(b"hello");

        let mut buf = [0u8; TAG_LEN + 6];
        let mut w = Writer::new(&mut buf);
        let produced = msg.encode(&mut w).unwrap();
        assert_eq!(produced, buf.len());

        let mut r = Reader::new(&buf);
        let parsed = Labeled::parse_in(&mut r, Global).unwrap();
        assert_eq!(parsed.tag(), msg.tag());
        assert_eq!(parsed.name(), b"hello");
    }

    #[test]
    fn missing_terminator_is_truncated() {
        let buf = [0u8; TAG_LEN + 3];
        let mut r = Reader::new(&buf);
        assert_eq!(
            Labeled::parse_in(&mut r, Global),
            Err(ParseError::Truncated)
        );
    }

    #[test]
    fn deferred_error_blocks_encode() {
        let mut msg = Labeled::new_in(Global);
        msg.errors.set();
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        assert_eq!(
            msg.encode(&mut w),
            Err(EncodeError::Malformed(Reason::HasDeferredError))
        );
        msg.clear_errors();
        assert!(msg.encode(&mut w).is_ok());
    }
}
