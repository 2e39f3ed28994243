// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! # redact
//!
//! A fixed-capacity presence table for byte strings, and a word redaction pass
//! built on top of it.
//!
//! - [`presence`]: open addressing with linear probing, one-at-a-time hashing
//!   and tombstone deletion. The table stores keys only and never resizes.
//! - [`hash`]: the slot hash and its [`KeyHashing`](hash::KeyHashing) modes.
//! - [`text`]: tokenizing, key normalization and the [`Redactor`](text::Redactor).
//!
//! The table is an owned value with no interior synchronization. Share it
//! across threads behind a lock.

pub mod error;
pub mod hash;
pub mod presence;
pub mod text;
