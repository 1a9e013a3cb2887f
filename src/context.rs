// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Context messages: values borrowed from a sibling message and used to
//! frame another message's length- or tag-dependent fields.
//!
//! A context is just an ordinary message, parsed and owned independently of
//! whoever borrows it; its fields are read through its own regular
//! accessors, not through any method this trait adds. [`Context`] exists
//! only to mark "this type is meant to be handed to another message's
//! `parse`/`encode` as context", the way the runtime this is modeled on lets
//! any previously-parsed struct be passed by pointer into a later one's
//! parse call.

/// Marks a message type as usable as another message's parse/encode
/// context. Implement this for any generated message type that a sibling
/// field's framing may depend on.
pub trait Context {}
