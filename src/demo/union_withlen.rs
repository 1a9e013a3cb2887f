// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A length-framed tagged union: `[tag: u8][len: u16][len bytes of arm]`.
//!
//! Known arms differ in how tolerant they are of a frame wider than their
//! minimal encoding: the `A` arm is strict and rejects any leftover frame
//! byte, while the `B` arm treats them as padding to ignore. Either way,
//! encoding always rewrites the frame to the arm's *actual* encoded size,
//! discarding any padding the message was parsed with. An unrecognized tag's
//! entire frame is stored and re-encoded verbatim.

use crate::dynarray::Seq;
use crate::core_compat::alloc::{Allocator, Global};
use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError, Reason};
use crate::message::Message;
use crate::union;

/// A length-framed union with two known arms and a catch-all default.
pub enum UnionWithLen<A: Allocator + Clone = Global> {
    A(u32),
    B(u16),
    Unknown(u8, Seq<u8, A>),
}

impl<A: Allocator + Clone> UnionWithLen<A> {
    fn tag(&self) -> u8 {
        match self {
            Self::A(_) => 1,
            Self::B(_) => 2,
            Self::Unknown(tag, _) => *tag,
        }
    }

    fn parse_in(r: &mut Reader<'_>, alloc: A) -> Result<Self, ParseError> {
        let tag = r.read_u8()?;
        let len = usize::from(r.read_u16()?);
        r.with_bounded(len, |sub| match tag {
            1 => {
                let value = sub.read_u32()?;
                union::require_exhausted(sub)?;
                Ok(Self::A(value))
            }
            2 => Ok(Self::B(sub.read_u16()?)),
            _ => {
                let rest = union::absorb_remainder(sub);
                let mut payload = Seq::new_in(alloc);
                payload.set_len(rest.len())?;
                payload.as_mut_slice().copy_from_slice(rest);
                Ok(Self::Unknown(tag, payload))
            }
        })
    }
}

impl<A: Allocator + Clone + Default> Message for UnionWithLen<A> {
    fn parse(r: &mut Reader<'_>) -> Result<Self, ParseError> {
        Self::parse_in(r, A::default())
    }

    fn encode(&mut self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        let start = w.offset();
        w.write_u8(self.tag())?;
        let len_pos = w.offset();
        w.write_u16(0)?;
        let body_start = w.offset();
        match self {
            Self::A(v) => w.write_u32(*v)?,
            Self::B(v) => w.write_u16(*v)?,
            Self::Unknown(_, payload) => w.write_bytes(payload.as_slice())?,
        }
        let body_len = w.offset() - body_start;
        w.patch_u16(len_pos, body_len as u16);
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
    fn known_arm_round_trips() {
        let mut msg = UnionWithLen::<Global>::A(0xdead_beef);
        let mut buf = [0u8; 7];
        let mut w = Writer::new(&mut buf);
        let produced = msg.encode(&mut w).unwrap();
        assert_eq!(produced, 7);
        assert_eq!(&buf[..3], [1, 0, 4]);

        let mut r = Reader::new(&buf);
        match UnionWithLen::<Global>::parse(&mut r).unwrap() {
            UnionWithLen::A(v) => assert_eq!(v, 0xdead_beef),
            _ => panic!("wrong arm"),
        }
    }

    #[test]
    fn known_arm_tolerates_trailing_padding_in_frame() {
        // tag=2 (u16 arm), len=6, body = 2-byte value + 4 bytes padding.
        let buf = [2u8, 0, 6, 0xab, 0xcd, 0, 0, 0, 0];
        let mut r = Reader::new(&buf);
        match UnionWithLen::<Global>::parse(&mut r).unwrap() {
            UnionWithLen::B(v) => assert_eq!(v, 0xabcd),
            _ => panic!("wrong arm"),
        }
        assert_eq!(r.offset(), buf.len());
    }

    #[test]
    fn re_encoding_drops_padding_to_canonical_length() {
        let buf = [2u8, 0, 6, 0xab, 0xcd, 0, 0, 0, 0];
        let mut r = Reader::new(&buf);
        let mut msg = UnionWithLen::<Global>::parse(&mut r).unwrap();

        let mut out = [0u8; 5];
        let mut w = Writer::new(&mut out);
        let produced = msg.encode(&mut w).unwrap();
        assert_eq!(produced, 5);
        assert_eq!(out, [2, 0, 2, 0xab, 0xcd]);
    }

    #[test]
    fn unknown_arm_re_encodes_unchanged() {
        let buf = [9u8, 0, 3, 0xaa, 0xbb, 0xcc];
        let mut r = Reader::new(&buf);
        let mut msg = UnionWithLen::<Global>::parse(&mut r).unwrap();

        let mut out = [0u8; 6];
        let mut w = Writer::new(&mut out);
        msg.encode(&mut w).unwrap();
        assert_eq!(out, buf);
    }

    #[test]
    fn strict_arm_rejects_trailing_byte_in_frame() {
        // tag=1 (u32 arm, strict), len=5: a full u32 plus one leftover byte.
        let buf = [1u8, 0, 5, 0, 0, 0, 1, 0xff];
        let mut r = Reader::new(&buf);
        assert_eq!(
            UnionWithLen::<Global>::parse(&mut r),
            Err(ParseError::Malformed(Reason::TrailingData))
        );
    }

    #[test]
    fn frame_shorter_than_declared_is_truncated() {
        let buf = [1u8, 0, 10, 0, 0, 0, 0];
        let mut r = Reader::new(&buf);
        assert_eq!(
            UnionWithLen::<Global>::parse(&mut r),
            Err(ParseError::Truncated)
        );
    }
}
