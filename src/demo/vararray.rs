// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A variable-length array with no explicit count prefix: it simply runs to
//! the end of the buffer, as many elements as fit.

use crate::dynarray::Seq;
use crate::core_compat::alloc::{Allocator, Global};
use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError, Reason};
use crate::message::Message;

const ELEM_SIZE: usize = 4;

/// An array of `u32`s occupying the rest of the buffer it's parsed from.
pub struct VarArray<A: Allocator + Clone = Global> {
    items: Seq<u32, A>,
}

impl<A: Allocator + Clone> VarArray<A> {
    pub fn items(&self) -> &[u32] {
        self.items.as_slice()
    }

    fn parse_in(r: &mut Reader<'_>, alloc: A) -> Result<Self, ParseError> {
        let mut items = Seq::new_in(alloc);
        while r.remaining() >= ELEM_SIZE {
            items.add(r.read_u32()?)?;
        }
        if r.remaining() != 0 {
            return Err(ParseError::Malformed(Reason::LengthMismatch {
                expected: ELEM_SIZE,
                actual: r.remaining(),
            }));
        }
        Ok(Self { items })
    }
}

impl<A: Allocator + Clone + Default> Message for VarArray<A> {
    fn parse(r: &mut Reader<'_>) -> Result<Self, ParseError> {
        Self::parse_in(r, A::default())
    }

    fn encode(&mut self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        let start = w.offset();
        for &item in self.items.as_slice() {
            w.write_u32(item)?;
        }
        Ok(w.offset() - start)
    }

    fn check(&self) -> Option<Reason> {
        None
    }

    fn clear_errors(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_empty_array() {
        let buf: [u8; 0] = [];
        let mut r = Reader::new(&buf);
        let msg = VarArray::<Global>::parse(&mut r).unwrap();
        assert!(msg.items().is_empty());
    }

    #[test]
    fn consumes_every_complete_element() {
        let buf = [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3];
        let mut r = Reader::new(&buf);
        let msg = VarArray::<Global>::parse(&mut r).unwrap();
        assert_eq!(msg.items(), [1, 2, 3]);
    }

    #[test]
    fn leftover_partial_element_is_malformed() {
        let buf = [0, 0, 0, 1, 0, 0];
        let mut r = Reader::new(&buf);
        assert_eq!(
            VarArray::<Global>::parse(&mut r),
            Err(ParseError::Malformed(Reason::LengthMismatch {
                expected: ELEM_SIZE,
                actual: 2,
            }))
        );
    }

    #[test]
    fn round_trips() {
        let buf = [0, 0, 0, 1, 0, 0, 0, 2];
        let mut r = Reader::new(&buf);
        let mut msg = VarArray::<Global>::parse(&mut r).unwrap();

        let mut out = [0u8; 8];
        let mut w = Writer::new(&mut out);
        msg.encode(&mut w).unwrap();
        assert_eq!(out, buf);
    }
}
