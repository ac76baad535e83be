//! Japanese WordNet store backed by SQLite.
//!
//! Reads the `word` and `sense` relations of a `wnjpn.db` database. The
//! connection is opened read-only and held for one run; [`WordNetStore::close`]
//! releases it explicitly so close failures can be reported.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{Connection, OpenFlags};

use crate::error::{Result, RuigoError};
use crate::lexicon::{LexicalEntry, LexicalStore};

/// Entries sharing a synset with `?1`, shortest lemma first.
///
/// The source lemma is not excluded; it is a member of its own synsets.
const SIMILAR_WORDS_SQL: &str = "
    WITH
      words_senses AS (
        SELECT word.wordid,
               word.lemma,
               sense.synset
        FROM word
        JOIN sense
               ON word.wordid = sense.wordid
      )
    SELECT similars.wordid,
           similars.lemma,
           similars.synset
    FROM words_senses similars
    JOIN words_senses sources
           ON similars.synset = sources.synset
    WHERE
      sources.lemma = ?1
    ORDER BY
      LENGTH(similars.lemma),
      similars.wordid
";

/// Relations the similar-words query depends on.
const REQUIRED_RELATIONS: [&str; 2] = ["word", "sense"];

/// Lexical store over a Japanese WordNet SQLite database.
pub struct WordNetStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl WordNetStore {
    /// Open the database at `path` read-only.
    ///
    /// A missing file or a database without the `word` and `sense` relations
    /// is a configuration error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RuigoError::configuration(format!(
                "WordNet database not found: {}",
                path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            RuigoError::configuration(format!(
                "Failed to open WordNet database '{}': {}",
                path.display(),
                e
            ))
        })?;
        info!("opened WordNet database {}", path.display());

        let mut store = Self::from_connection(conn)?;
        store.path = Some(path.to_path_buf());
        Ok(store)
    }

    /// Wrap an already open connection (for example an in-memory database).
    pub fn from_connection(conn: Connection) -> Result<Self> {
        verify_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Path of the database file, if the store was opened from one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the underlying connection.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| {
            RuigoError::store_query(format!("Failed to close WordNet database: {}", e))
        })?;
        match path {
            Some(path) => info!("closed WordNet database {}", path.display()),
            None => info!("closed WordNet database"),
        }
        Ok(())
    }
}

impl LexicalStore for WordNetStore {
    fn find_similar(&self, lemma: &str) -> Result<Vec<LexicalEntry>> {
        let mut stmt = self.conn.prepare_cached(SIMILAR_WORDS_SQL)?;
        let entries = stmt
            .query_map([lemma], |row| {
                Ok(LexicalEntry {
                    word_id: row.get(0)?,
                    lemma: row.get(1)?,
                    synset: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!("{} candidate(s) for '{}'", entries.len(), lemma);
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

fn verify_schema(conn: &Connection) -> Result<()> {
    for relation in REQUIRED_RELATIONS {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
                [relation],
                |row| row.get(0),
            )
            .map_err(|e| {
                RuigoError::configuration(format!("Failed to inspect WordNet schema: {}", e))
            })?;
        if found == 0 {
            return Err(RuigoError::configuration(format!(
                "WordNet database has no '{}' relation",
                relation
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(words: &[(i64, &str)], senses: &[(i64, &str)]) -> WordNetStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE word (wordid INTEGER PRIMARY KEY, lang TEXT, lemma TEXT, pron TEXT, pos TEXT);
            CREATE TABLE sense (synset TEXT, wordid INTEGER, lang TEXT, rank TEXT, lexid INTEGER, freq INTEGER, src TEXT);
            ",
        )
        .unwrap();
        for (id, lemma) in words {
            conn.execute(
                "INSERT INTO word (wordid, lang, lemma) VALUES (?1, 'jpn', ?2)",
                rusqlite::params![id, lemma],
            )
            .unwrap();
        }
        for (id, synset) in senses {
            conn.execute(
                "INSERT INTO sense (synset, wordid, lang) VALUES (?1, ?2, 'jpn')",
                rusqlite::params![synset, id],
            )
            .unwrap();
        }
        WordNetStore::from_connection(conn).unwrap()
    }

    #[test]
    fn test_find_similar_orders_by_length_and_includes_self() {
        let store = store_with(
            &[(1, "自動車"), (2, "車"), (3, "乗用車")],
            &[(1, "car-n"), (2, "car-n"), (3, "car-n")],
        );

        let entries = store.find_similar("自動車").unwrap();
        let lemmas: Vec<&str> = entries.iter().map(|e| e.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["車", "自動車", "乗用車"]);
        assert!(entries.iter().all(|e| e.synset == "car-n"));
    }

    #[test]
    fn test_find_similar_spans_all_synsets_of_source() {
        let store = store_with(
            &[(1, "食べる"), (2, "食う"), (3, "召し上がる"), (4, "暮らす")],
            &[(1, "eat-v"), (2, "eat-v"), (3, "eat-v"), (2, "live-v"), (4, "live-v")],
        );

        let entries = store.find_similar("食う").unwrap();
        let lemmas: Vec<&str> = entries.iter().map(|e| e.lemma.as_str()).collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(lemmas[0], "食う");
        assert!(lemmas.contains(&"暮らす"));
        assert!(lemmas.contains(&"召し上がる"));
        for pair in entries.windows(2) {
            assert!(pair[0].char_len() <= pair[1].char_len());
        }
    }

    #[test]
    fn test_find_similar_unknown_lemma_is_empty() {
        let store = store_with(&[(1, "車")], &[(1, "car-n")]);
        assert!(store.find_similar("猫").unwrap().is_empty());
    }

    #[test]
    fn test_missing_relation_is_configuration_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE word (wordid INTEGER, lemma TEXT);")
            .unwrap();

        let result = WordNetStore::from_connection(conn);
        assert!(matches!(result, Err(RuigoError::Configuration(_))));
    }

    #[test]
    fn test_open_missing_file_is_configuration_error() {
        let result = WordNetStore::open("/nonexistent/wnjpn.db");
        assert!(matches!(result, Err(RuigoError::Configuration(_))));
    }

    #[test]
    fn test_close_in_memory_store() {
        let store = store_with(&[(1, "車")], &[(1, "car-n")]);
        assert!(store.path().is_none());
        store.close().unwrap();
    }
}
