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

//! Word-level text handling around a [`PresenceTable`](crate::presence::PresenceTable).
//!
//! Documents are split into whitespace-delimited tokens, each token's word is
//! normalized to an uppercase ASCII key, and keys found in the table are
//! masked with asterisks.
//!
//! # Usage
//!
//! ```rust
//! use redact::presence::PresenceTable;
//! use redact::text::Redactor;
//!
//! let redactor = Redactor::from_words("secret\nhidden\n", PresenceTable::new(64)).unwrap();
//! let redaction = redactor.redact("The Secret, and the hidden part.\n");
//!
//! assert_eq!(redaction.text(), "The ******* and the ****** part.\n");
//! assert_eq!(redaction.num_redacted(), 2);
//! ```

mod redactor;

pub use self::redactor::Redaction;
pub use self::redactor::Redactor;

/// A word and the delimiter that followed it.
///
/// Concatenating the words and delimiters of all tokens of a text gives back
/// the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    word: &'a str,
    delimiter: Option<char>,
}

impl<'a> Token<'a> {
    /// Returns the word, which may be empty between adjacent delimiters.
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Returns the delimiter, or `None` for a final word with nothing after it.
    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }
}

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\n'
}

/// Split `text` into tokens at every space and newline.
///
/// # Examples
///
/// ```
/// use redact::text::tokenize;
///
/// let tokens = tokenize("one two\nthree");
/// let words: Vec<_> = tokens.iter().map(|t| t.word()).collect();
/// assert_eq!(words, ["one", "two", "three"]);
/// assert_eq!(tokens[1].delimiter(), Some('\n'));
/// assert_eq!(tokens[2].delimiter(), None);
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(is_delimiter) {
        tokens.push(Token {
            word: &rest[..pos],
            delimiter: rest[pos..].chars().next(),
        });
        // Delimiters are single-byte.
        rest = &rest[pos + 1..];
    }
    if !rest.is_empty() {
        tokens.push(Token {
            word: rest,
            delimiter: None,
        });
    }
    tokens
}

/// Turn a word into a table key: ASCII letters only, uppercased.
///
/// # Examples
///
/// ```
/// use redact::text::normalize;
///
/// assert_eq!(normalize("don't!"), "DONT");
/// assert_eq!(normalize("42"), "");
/// ```
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
