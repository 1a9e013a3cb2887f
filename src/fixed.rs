// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Fixed-length array fields.
//!
//! A fixed array's length is part of a message type's shape, not its wire
//! data, so it maps directly onto a const-generic Rust array instead of a
//! runtime-checked container like [`crate::dynarray::Seq`]. These two functions
//! are the whole of what a generated accessor for such a field needs: copy
//! exactly `N` bytes in, copy exactly `N` bytes out.

use crate::cursor::{Reader, Writer};
use crate::error::{EncodeError, ParseError};

/// Reads a fixed-size byte array.
pub fn read_bytes<const N: usize>(r: &mut Reader<'_>) -> Result<[u8; N], ParseError> {
    let bytes = r.read_bytes(N)?;
    Ok(bytes.try_into().unwrap_or_else(|_| unreachable!()))
}

/// Writes a fixed-size byte array.
pub fn write_bytes<const N: usize>(w: &mut Writer<'_>, value: &[u8; N]) -> Result<(), EncodeError> {
    w.write_bytes(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_fixed_array() {
        let value = [1u8, 2, 3, 4];
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        write_bytes(&mut w, &value).unwrap();

        let mut r = Reader::new(&buf);
        let parsed: [u8; 4] = read_bytes(&mut r).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn short_input_is_truncated() {
        let buf = [0u8; 2];
        let mut r = Reader::new(&buf);
        assert_eq!(read_bytes::<4>(&mut r), Err(ParseError::Truncated));
    }
}
