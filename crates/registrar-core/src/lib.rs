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

//! # Registrar Core
//!
//! Foundational containers and index types for the registrar workspace. The
//! enrollment engine stores rosters and waitlists in the containers defined
//! here, and the model crate builds its strongly typed handles on top of the
//! index utilities.
//!
//! ## Modules
//!
//! - `collections`: `BoundedList<T>`, a fixed-capacity, position-addressable
//!   sequence that rejects duplicates, and `BoundedQueue<T>`, a strict FIFO
//!   queue layered on top of it. Both report every rejected operation through
//!   `CollectionError` and leave their contents untouched on failure.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`) that
//!   keep student, course and faculty handles from being mixed up.

pub mod collections;
pub mod utils;
