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

//! Redact a document against a word list.
//!
//! ```text
//! RUST_LOG=debug cargo run -p demos --bin redact-demo -- --words redact.txt --text debate.txt
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use redact::hash::KeyHashing;
use redact::presence::DEFAULT_CAPACITY;
use redact::presence::PresenceTable;
use redact::text::Redactor;

#[derive(Debug, Parser)]
#[command(about = "Mask every word of a document that appears in a word list")]
struct Args {
    /// Whitespace separated words to redact.
    #[arg(long, default_value = "redact.txt")]
    words: PathBuf,

    /// Document to redact.
    #[arg(long, default_value = "debate.txt")]
    text: PathBuf,

    /// Number of slots in the word table.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Hash only the first four bytes of each word, like older word tables.
    #[arg(long)]
    legacy_hash: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let hashing = if args.legacy_hash {
        KeyHashing::LegacyPrefix
    } else {
        KeyHashing::Full
    };
    let table = PresenceTable::builder()
        .capacity(args.capacity)
        .hashing(hashing)
        .build()?;

    let redactor = Redactor::from_path(&args.words, table)?;
    log::info!(
        "loaded {} words, load factor {:.2}",
        redactor.table().len(),
        redactor.table().load_factor()
    );

    let document = std::fs::read_to_string(&args.text)
        .with_context(|| format!("failed to read {}", args.text.display()))?;
    let redaction = redactor.redact(&document);
    println!("{redaction}");
    log::info!(
        "redacted {} of {} tokens",
        redaction.num_redacted(),
        redaction.num_tokens()
    );

    redactor.into_table().destroy()?;
    Ok(())
}
