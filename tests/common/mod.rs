//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::path::PathBuf;

use rusqlite::{Connection, params};
use tempfile::TempDir;

use ruigo::analysis::segment::Segment;
use ruigo::analysis::tokenizer::Tokenizer;
use ruigo::error::{Result, RuigoError};
use ruigo::lexicon::{LexicalEntry, LexicalStore};

/// A WordNet database written to a temporary directory.
pub struct WordNetFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write a `wnjpn.db`-shaped database where each synset lists its lemmas.
pub fn wordnet_fixture(synsets: &[(&str, &[&str])]) -> WordNetFixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wnjpn.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "
        CREATE TABLE word (wordid INTEGER PRIMARY KEY, lang TEXT, lemma TEXT, pron TEXT, pos TEXT);
        CREATE TABLE sense (synset TEXT, wordid INTEGER, lang TEXT, rank TEXT, lexid INTEGER, freq INTEGER, src TEXT);
        ",
    )
    .unwrap();

    let mut next_id = 1i64;
    for (synset, lemmas) in synsets {
        for lemma in lemmas.iter() {
            let existing: Option<i64> = conn
                .query_row("SELECT wordid FROM word WHERE lemma = ?1", [lemma], |row| {
                    row.get(0)
                })
                .ok();
            let word_id = match existing {
                Some(id) => id,
                None => {
                    conn.execute(
                        "INSERT INTO word (wordid, lang, lemma) VALUES (?1, 'jpn', ?2)",
                        params![next_id, lemma],
                    )
                    .unwrap();
                    next_id += 1;
                    next_id - 1
                }
            };
            conn.execute(
                "INSERT INTO sense (synset, wordid, lang) VALUES (?1, ?2, 'jpn')",
                params![synset, word_id],
            )
            .unwrap();
        }
    }
    conn.close().unwrap();

    WordNetFixture { _dir: dir, path }
}

/// Tokenizer that replays pre-analyzed segments.
///
/// Fails when the segments do not spell out the sentence it is asked to
/// tokenize.
pub struct PretaggedTokenizer {
    segments: Vec<Segment>,
}

impl PretaggedTokenizer {
    pub fn new(parts: &[(&str, &str)]) -> Self {
        let mut offset = 0;
        let segments = parts
            .iter()
            .enumerate()
            .map(|(i, (surface, tag))| {
                let start = offset;
                offset += surface.len();
                Segment::with_offsets(*surface, *tag, i, start, offset)
            })
            .collect();
        Self { segments }
    }

    pub fn sentence(&self) -> String {
        self.segments.iter().map(|s| s.surface.as_str()).collect()
    }
}

impl Tokenizer for PretaggedTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Segment>> {
        if text != self.sentence() {
            return Err(RuigoError::tokenization(format!(
                "no analysis for '{}'",
                text
            )));
        }
        Ok(self.segments.clone())
    }

    fn name(&self) -> &'static str {
        "pretagged"
    }
}

/// Wraps a store and counts the lookups made through it.
pub struct CountingStore<S> {
    inner: S,
    queries: Cell<usize>,
}

impl<S: LexicalStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            queries: Cell::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl<S: LexicalStore> LexicalStore for CountingStore<S> {
    fn find_similar(&self, lemma: &str) -> Result<Vec<LexicalEntry>> {
        self.queries.set(self.queries.get() + 1);
        self.inner.find_similar(lemma)
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}
