// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A record of plain fixed-width big-endian integers — the simplest message
//! shape this runtime supports, with no allocation and no deferred errors.

use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError, Reason};
use crate::message::Message;

/// A record of one each of the four integer widths this runtime encodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Integers {
    pub a: u8,
    pub b: u16,
    pub c: u32,
    pub d: u64,
}

impl Message for Integers {
    fn parse(r: &mut Reader<'_>) -> Result<Self, ParseError> {
        let a = r.read_u8()?;
        let b = r.read_u16()?;
        let c = r.read_u32()?;
        let d = r.read_u64()?;
        Ok(Self { a, b, c, d })
    }

    fn encode(&mut self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        let start = w.offset();
        w.write_u8(self.a)?;
        w.write_u16(self.b)?;
        w.write_u32(self.c)?;
        w.write_u64(self.d)?;
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

    const WIRE_LEN: usize = 1 + 2 + 4 + 8;

    fn sample() -> Integers {
        Integers {
            a: 0x11,
            b: 0x2233,
            c: 0x4455_6677,
            d: 0x8899_aabb_ccdd_eeff,
        }
    }

    #[test]
    fn round_trips() {
        let msg = sample();
        let mut buf = [0u8; WIRE_LEN];
        let mut w = Writer::new(&mut buf);
        let produced = msg.clone().encode(&mut w).unwrap();
        assert_eq!(produced, WIRE_LEN);

        let mut r = Reader::new(&buf);
        let parsed = Integers::parse(&mut r).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(r.offset(), WIRE_LEN);
    }

    #[test]
    fn every_prefix_is_truncated() {
        let msg = sample();
        let mut buf = [0u8; WIRE_LEN];
        let mut w = Writer::new(&mut buf);
        msg.clone().encode(&mut w).unwrap();

        for len in 0..WIRE_LEN {
            let mut r = Reader::new(&buf[..len]);
            assert_eq!(Integers::parse(&mut r), Err(ParseError::Truncated));
        }
    }

    #[test]
    fn encode_into_undersized_buffer_is_truncated() {
        let mut msg = sample();
        for len in 0..WIRE_LEN {
            let mut buf = vec![0u8; len];
            let mut w = Writer::new(&mut buf);
            assert_eq!(msg.encode(&mut w), Err(EncodeError::Truncated));
        }
    }
}
