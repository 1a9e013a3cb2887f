// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! An unframed tagged union: no length prefix demarcates it from the rest of
//! the buffer, so its default arm absorbs everything left in the input
//! rather than a bounded sub-region.

use crate::dynarray::Seq;
use crate::core_compat::alloc::{Allocator, Global};
use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError};
use crate::message::Message;
use crate::union;

/// A tagged union with two known arms and a catch-all default.
pub enum UnionNoLen<A: Allocator + Clone = Global> {
    A(u32),
    B(u16),
    /// An unrecognized tag, with its payload stored verbatim so it can be
    /// re-encoded unchanged.
    Unknown(u8, Seq<u8, A>),
}

impl<A: Allocator + Clone> UnionNoLen<A> {
    fn parse_in(r: &mut Reader<'_>, alloc: A) -> Result<Self, ParseError> {
        let tag = r.read_u8()?;
        match tag {
            1 => Ok(Self::A(r.read_u32()?)),
            2 => Ok(Self::B(r.read_u16()?)),
            _ => {
                let rest = union::absorb_remainder(r);
                let mut payload = Seq::new_in(alloc);
                payload.set_len(rest.len())?;
                payload.as_mut_slice().copy_from_slice(rest);
                Ok(Self::Unknown(tag, payload))
            }
        }
    }
}

impl<A: Allocator + Clone + Default> Message for UnionNoLen<A> {
    fn parse(r: &mut Reader<'_>) -> Result<Self, ParseError> {
        Self::parse_in(r, A::default())
    }

    fn encode(&mut self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        let start = w.offset();
        match self {
            Self::A(v) => {
                w.write_u8(1)?;
                w.write_u32(*v)?;
            }
            Self::B(v) => {
                w.write_u8(2)?;
                w.write_u16(*v)?;
            }
            Self::Unknown(tag, payload) => {
                w.write_u8(*tag)?;
                w.write_bytes(payload.as_slice())?;
            }
        }
        Ok(w.offset() - start)
    }

    fn check(&self) -> Option<crate::error::Reason> {
        None
    }

    fn clear_errors(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_arm_a_round_trips() {
        let mut msg = UnionNoLen::<Global>::A(0x1020_3040);
        let mut buf = [0u8; 5];
        let mut w = Writer::new(&mut buf);
        let produced = msg.encode(&mut w).unwrap();
        assert_eq!(produced, 5);

        let mut r = Reader::new(&buf);
        match UnionNoLen::<Global>::parse(&mut r).unwrap() {
            UnionNoLen::A(v) => assert_eq!(v, 0x1020_3040),
            _ => panic!("wrong arm"),
        }
    }

    #[test]
    fn unknown_tag_absorbs_remaining_bytes() {
        let buf = [9u8, 0xaa, 0xbb, 0xcc];
        let mut r = Reader::new(&buf);
        match UnionNoLen::<Global>::parse(&mut r).unwrap() {
            UnionNoLen::Unknown(tag, payload) => {
                assert_eq!(tag, 9);
                assert_eq!(payload.as_slice(), [0xaa, 0xbb, 0xcc]);
            }
            _ => panic!("wrong arm"),
        }
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn unknown_arm_re_encodes_unchanged() {
        let buf = [9u8, 0xaa, 0xbb, 0xcc];
        let mut r = Reader::new(&buf);
        let mut msg = UnionNoLen::<Global>::parse(&mut r).unwrap();

        let mut out = [0u8; 4];
        let mut w = Writer::new(&mut out);
        msg.encode(&mut w).unwrap();
        assert_eq!(out, buf);
    }
}
