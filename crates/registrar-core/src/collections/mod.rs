// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Bounded Collections
//!
//! Fixed-capacity containers used as the backing store for rosters and
//! waitlists.
//!
//! Capacity and duplicate checks live at the single insertion entry point of
//! `BoundedList`, so every structure built on top of it (the FIFO
//! `BoundedQueue`, the enrollment roster) inherits both guarantees without
//! repeating them.
//!
//! ## Submodules
//!
//! - `bounded_list`: ordered, position-addressable, duplicate-free sequence
//!   with a declared capacity that can never drop below the live length.
//! - `bounded_queue`: first-in-first-out queue over a `BoundedList`.
//! - `error`: the shared `CollectionError` type.

pub mod bounded_list;
pub mod bounded_queue;
pub mod error;
