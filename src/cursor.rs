// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! In-memory read and write cursors over a byte buffer.
//!
//! Every generated message type parses from and encodes into a single
//! in-memory buffer (streaming I/O is out of scope for this runtime, which
//! only ever sees a whole buffer at a time); [`Reader`] and [`Writer`] are
//! the cursor types generated `parse`/`encode` bodies drive field-by-field.

use crate::error::{EncodeError, ParseError, Reason};

/// A read cursor over a byte slice, tracking how much has been consumed.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The cursor's current offset from the start of the buffer; this is
    /// what a position-marker field captures.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The number of unread bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The unread bytes, without consuming them.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Reads and consumes one byte.
    pub fn read_u8(&mut self) -> Result<u8, ParseError> {
        let byte = *self.buf.get(self.pos).ok_or(ParseError::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads and consumes a big-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16, ParseError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Reads and consumes a big-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, ParseError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Reads and consumes a big-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64, ParseError> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let bytes = self.read_bytes(N)?;
        // `read_bytes` guarantees a slice of exactly `N` bytes.
        Ok(bytes.try_into().unwrap_or_else(|_| unreachable!()))
    }

    /// Reads and consumes exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        if self.remaining() < len {
            return Err(ParseError::Truncated);
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Consumes and discards `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<(), ParseError> {
        self.read_bytes(len).map(|_| ())
    }

    /// Reads the bytes up to and including the next NUL, returning the
    /// content with the terminator stripped. Fails with [`ParseError::Truncated`]
    /// if no NUL appears before the buffer ends.
    pub fn read_until_nul(&mut self) -> Result<&'a [u8], ParseError> {
        let rest = self.remaining_bytes();
        let nul_at = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(ParseError::Truncated)?;
        let content = &rest[..nul_at];
        self.pos += nul_at + 1;
        Ok(content)
    }

    /// Runs `f` on a cursor restricted to the next `len` bytes, consuming
    /// exactly `len` bytes from `self` regardless of how many `f` itself
    /// reads. This is how length-framed unions bound a sub-parse.
    ///
    /// `len` bytes must already be present in `self` or this fails with
    /// [`ParseError::Truncated`] (more outer input could still fix that). Once
    /// that frame is sliced off, though, it's the whole world `f` gets to
    /// parse from: if `f` itself runs out of bytes, no amount of additional
    /// input can help, since the frame already fixed the arm's width. That
    /// case is reported as [`ParseError::Malformed`] instead of passing the
    /// inner `Truncated` through unchanged.
    pub fn with_bounded<T>(
        &mut self,
        len: usize,
        f: impl FnOnce(&mut Reader<'a>) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let bytes = self.read_bytes(len)?;
        let mut sub = Reader::new(bytes);
        f(&mut sub).map_err(|err| match err {
            ParseError::Truncated => ParseError::Malformed(Reason::FrameExhausted),
            malformed => malformed,
        })
    }
}

/// A write cursor over a mutable byte slice, tracking how much has been
/// produced.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The number of bytes written so far.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The number of unwritten bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Writes one byte.
    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.write_bytes(&[value])
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes `bytes` verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if self.remaining() < bytes.len() {
            return Err(EncodeError::Truncated);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Writes a single NUL byte; used to terminate nul-terminated strings.
    pub fn write_nul(&mut self) -> Result<(), EncodeError> {
        self.write_u8(0)
    }

    /// Overwrites the big-endian `u16` already written at offset `at` with
    /// `value`. Used to back-patch a length-framed union's length prefix
    /// once the arm it frames has actually been encoded, since the
    /// canonical length is the arm's real encoded size, not whatever length
    /// the message may have been parsed with.
    ///
    /// # Panics
    /// Panics if `at + 2` is past what's been written so far.
    pub fn patch_u16(&mut self, at: usize, value: u16) {
        assert!(at + 2 <= self.pos, "patch_u16 past what's been written");
        self.buf[at..at + 2].copy_from_slice(&value.to_be_bytes());
    }

    /// Reserves `len` bytes for a value whose encoding isn't known until
    /// after a later field has been written (used for length-framed unions,
    /// where the frame's length is the *encoded* arm's length, not its
    /// pre-computed size), running `f` with a writer over that reservation
    /// and returning how many of the reserved bytes `f` actually used.
    ///
    /// `f` must not write more than `len` bytes; doing so is a bug in the
    /// caller (a generated union body), not a malformed-input condition, so
    /// it's reported as [`EncodeError::Truncated`] same as any other
    /// overrun.
    pub fn with_reserved<T>(
        &mut self,
        len: usize,
        f: impl FnOnce(&mut Writer<'_>) -> Result<T, EncodeError>,
    ) -> Result<(T, usize), EncodeError> {
        if self.remaining() < len {
            return Err(EncodeError::Truncated);
        }
        let start = self.pos;
        let end = start + len;
        let mut sub = Writer::new(&mut self.buf[start..end]);
        let value = f(&mut sub)?;
        let used = sub.offset();
        self.pos += len;
        Ok((value, used))
    }
}
