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

use std::fmt;
use std::path::Path;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::presence::PresenceTable;
use crate::text::normalize;
use crate::text::tokenize;

const MASK: char = '*';

/// Masks the words of a document whose keys are stored in a presence table.
///
/// Words are compared after [`normalize`], so `"Secret,"` and `"SECRET"` are
/// the same word. Words that normalize to nothing are never redacted.
#[derive(Debug)]
pub struct Redactor {
    table: PresenceTable,
}

impl Redactor {
    /// Wrap a table whose keys are already normalized.
    pub fn new(table: PresenceTable) -> Self {
        Self { table }
    }

    /// Fill `table` with the normalized words of `word_list`.
    ///
    /// Words already present are not stored again.
    ///
    /// # Errors
    ///
    /// Propagates the table's insertion errors, such as
    /// [`ErrorKind::TableFull`] when the list has more distinct words than the
    /// table has slots.
    pub fn from_words(word_list: &str, mut table: PresenceTable) -> Result<Self, Error> {
        for token in tokenize(word_list) {
            let key = normalize(token.word());
            if key.is_empty() || table.contains(&key) {
                continue;
            }
            table.insert(&key)?;
        }
        Ok(Self { table })
    }

    /// Read a word list from `path` and fill `table` with it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Io`] if the file cannot be read, otherwise as
    /// [`Redactor::from_words`].
    pub fn from_path<P: AsRef<Path>>(path: P, table: PresenceTable) -> Result<Self, Error> {
        let path = path.as_ref();
        let word_list = std::fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorKind::Io, "failed to read word list")
                .with_context("path", path.display())
                .set_source(err)
        })?;
        Self::from_words(&word_list, table)
    }

    /// Returns whether `word` would be masked.
    pub fn is_redactable(&self, word: &str) -> bool {
        let key = normalize(word);
        !key.is_empty() && self.table.contains(key)
    }

    /// Mask every redactable word of `document`, one `*` per character, and
    /// keep everything else as is.
    pub fn redact(&self, document: &str) -> Redaction {
        let mut text = String::with_capacity(document.len());
        let mut num_tokens = 0;
        let mut num_redacted = 0;

        for token in tokenize(document) {
            num_tokens += 1;
            let word = token.word();
            if self.is_redactable(word) {
                text.extend(std::iter::repeat_n(MASK, word.chars().count()));
                num_redacted += 1;
            } else {
                text.push_str(word);
            }
            if let Some(delimiter) = token.delimiter() {
                text.push(delimiter);
            }
        }

        Redaction {
            text,
            num_tokens,
            num_redacted,
        }
    }

    /// Returns the backing table.
    pub fn table(&self) -> &PresenceTable {
        &self.table
    }

    /// Give the backing table back, e.g. to destroy it.
    pub fn into_table(self) -> PresenceTable {
        self.table
    }
}

/// The result of [`Redactor::redact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    text: String,
    num_tokens: usize,
    num_redacted: usize,
}

impl Redaction {
    /// Returns the redacted document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the result, returning the redacted document.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the number of tokens the document was split into.
    pub fn num_tokens(&self) -> usize {
        self.num_tokens
    }

    /// Returns the number of masked tokens.
    pub fn num_redacted(&self) -> usize {
        self.num_redacted
    }
}

impl fmt::Display for Redaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_skips_duplicates_and_empty_keys() {
        let redactor =
            Redactor::from_words("Secret secret SECRET! -- 123\nhidden", PresenceTable::new(8))
                .unwrap();
        assert_eq!(redactor.table().len(), 2);
        assert!(redactor.table().contains("SECRET"));
        assert!(redactor.table().contains("HIDDEN"));
        assert!(!redactor.table().contains(""));
    }

    #[test]
    fn test_new_uses_table_as_is() {
        let mut table = PresenceTable::new(8);
        table.insert("HIDDEN").unwrap();
        // Keys are matched after normalization, so a lowercase key never matches.
        table.insert("lower").unwrap();

        let redactor = Redactor::new(table);
        assert!(redactor.is_redactable("hidden"));
        assert!(!redactor.is_redactable("lower"));
    }

    #[test]
    fn test_punctuation_only_words_are_kept() {
        let redactor = Redactor::from_words("--", PresenceTable::new(8)).unwrap();
        let redaction = redactor.redact("a -- b");
        assert_eq!(redaction.text(), "a -- b");
        assert_eq!(redaction.num_redacted(), 0);
    }

    #[test]
    fn test_redact_masks_per_character() {
        let redactor = Redactor::from_words("café", PresenceTable::new(8)).unwrap();
        let redaction = redactor.redact("Café time");
        assert_eq!(redaction.text(), "**** time");
        assert_eq!(redaction.num_tokens(), 2);
        assert_eq!(redaction.into_text(), "**** time");
    }

    #[test]
    fn test_into_table_returns_filled_table() {
        let redactor = Redactor::from_words("one two", PresenceTable::new(8)).unwrap();
        let mut table = redactor.into_table();
        assert_eq!(table.len(), 2);
        table.destroy().unwrap();
        assert!(!table.is_live());
    }
}
