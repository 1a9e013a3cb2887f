// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A message nesting another message type, gated by a restricted scalar
//! whose legal values are a closed three-member set.

use num_enum::TryFromPrimitive;

use crate::core_compat::alloc::{Allocator, Global};
use crate::core_compat::boxed::Box;
use crate::cursor::{Reader, Writer};
use crate::demo::integers::Integers;
use crate::error::{EncodeError, ParseError, Reason};
use crate::message::Message;
use crate::restrict;

/// A restricted scalar with exactly three legal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Mode {
    Read = 1,
    Write = 2,
    Both = 3,
}

/// An `Integers` record, plus a second `Integers` record present only when
/// `mode` isn't `Read`.
pub struct Nested<A: Allocator + Clone = Global> {
    pub mode: Mode,
    pub inner: Integers,
    pub child: Option<Box<Integers, A>>,
}

impl<A: Allocator + Clone> Nested<A> {
    fn parse_in(r: &mut Reader<'_>, alloc: A) -> Result<Self, ParseError> {
        let mode: Mode = restrict::parse_enum(r.read_u8()?)?;
        let inner = Integers::parse(r)?;
        let child = if mode == Mode::Read {
            None
        } else {
            let value = Integers::parse(r)?;
            Some(Box::new_in(value, alloc))
        };
        Ok(Self { mode, inner, child })
    }
}

impl<A: Allocator + Clone + Default> Message for Nested<A> {
    fn parse(r: &mut Reader<'_>) -> Result<Self, ParseError> {
        Self::parse_in(r, A::default())
    }

    fn encode(&mut self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        let start = w.offset();
        w.write_u8(self.mode as u8)?;
        self.inner.encode(w)?;
        if let Some(child) = &mut self.child {
            (**child).encode(w)?;
        }
        Ok(w.offset() - start)
    }

    fn check(&self) -> Option<Reason> {
        match (self.mode, &self.child) {
            (Mode::Read, Some(_)) | (Mode::Write | Mode::Both, None) => {
                Some(Reason::InconsistentFields)
            }
            _ => None,
        }
    }

    fn clear_errors(&mut self) {}
}
