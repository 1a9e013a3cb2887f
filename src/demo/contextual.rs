// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A message whose array length comes from a sibling context message rather
//! than from its own wire bytes.

use crate::dynarray::Seq;
use crate::context::Context;
use crate::core_compat::alloc::{Allocator, Global};
use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError, Reason};
use crate::message::ContextualMessage;

/// A context message supplying the element count another message's array
/// field is framed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    pub value: u32,
}

impl Context for Count {}

/// A byte array whose length is `ctx.value`, not encoded in its own bytes.
pub struct Varsize<A: Allocator + Clone = Global> {
    items: Seq<u8, A>,
}

impl<A: Allocator + Clone> Varsize<A> {
    pub fn items(&self) -> &[u8] {
        self.items.as_slice()
    }

    fn parse_in(r: &mut Reader<'_>, ctx: &Count, alloc: A) -> Result<Self, ParseError> {
        let len = ctx.value as usize;
        let bytes = r.read_bytes(len)?;
        let mut items = Seq::new_in(alloc);
        items.set_len(len)?;
        items.as_mut_slice().copy_from_slice(bytes);
        Ok(Self { items })
    }
}

impl<A: Allocator + Clone + Default> ContextualMessage<Count> for Varsize<A> {
    fn parse(r: &mut Reader<'_>, ctx: &Count) -> Result<Self, ParseError> {
        Self::parse_in(r, ctx, A::default())
    }

    fn encode(&mut self, w: &mut Writer<'_>, ctx: &Count) -> Result<usize, EncodeError> {
        if self.items.len() != ctx.value as usize {
            return Err(EncodeError::Malformed(Reason::ContextMismatch));
        }
        w.write_bytes(self.items.as_slice())?;
        Ok(self.items.len())
    }

    fn check(&self) -> Option<Reason> {
        None
    }

    fn clear_errors(&mut self) {}
}
