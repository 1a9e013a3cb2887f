// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Runtime support for code-generated binary-message codecs.
//!
//! A code generator that reads a wire-format description emits, for each
//! message type it describes, a struct plus a `parse`/`encode`/`check`/
//! `clear_errors` quartet and a set of field accessors — but it doesn't emit
//! the dynamic array, the nul-terminated string, or the cursor and error
//! types those bodies are built from. This crate is that shared runtime:
//!
//! - [`dynarray`] — the checked, overflow-safe dynamic array
//!   ([`dynarray::Seq`]) every variable-length field is built on, plus a
//!   fault-injecting allocator for exercising failure-recovery paths.
//! - [`string`] — [`string::Str`], a nul-terminated byte string built atop
//!   `Seq`.
//! - [`fixed`] — helpers for fixed-length array fields, which need no
//!   runtime container at all.
//! - [`cursor`] — [`cursor::Reader`] and [`cursor::Writer`], the in-memory
//!   read/write cursors generated `parse`/`encode` bodies drive.
//! - [`error`] — the [`error::ParseError`]/[`error::EncodeError`] result
//!   taxonomy: truncated-try-again vs. malformed-never-will-parse, kept
//!   distinct rather than collapsed into one failure case.
//! - [`restrict`] — validation for restricted scalars (closed sets and
//!   ranges).
//! - [`position`] — zero-wire-byte fields that capture a cursor offset.
//! - [`context`] — the marker trait for messages that frame a sibling
//!   message's fields.
//! - [`union`] — shared helpers for tagged-union bodies (default-arm
//!   absorption, length-frame exhaustion checks).
//! - [`message`] — the [`message::Message`]/[`message::ContextualMessage`]
//!   protocol traits and the deferred error word ([`message::ErrorFlag`])
//!   `encode` consults.
//! - [`demo`] — hand-written examples of generated message types, one per
//!   field shape the runtime supports.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(nightly, feature(allocator_api))]

#[cfg(nightly)]
extern crate alloc;

pub mod context;
pub mod core_compat;
pub mod cursor;
pub mod demo;
pub mod dynarray;
pub mod error;
pub mod fixed;
pub mod message;
pub mod position;
pub mod restrict;
pub mod string;
pub mod union;
