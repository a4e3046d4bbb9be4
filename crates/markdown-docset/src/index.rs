//! SQLite-backed search index (`docSet.dsidx`).

use std::path::Path;

use rusqlite::{params, Connection, Transaction};

use crate::error::Result;
use crate::toc::{IndexSink, Outline};

const SCHEMA: &str = "\
DROP TABLE IF EXISTS searchIndex;
CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT);
CREATE UNIQUE INDEX anchor ON searchIndex (name, type, path);
";

/// The docset search index. Creating it drops any pre-existing table, so
/// every run starts from an empty index.
pub struct SearchIndex {
    conn: Connection,
}

impl SearchIndex {
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Flush the outline into the table inside one transaction. Nothing is
    /// committed unless every insert succeeds; the primary key then
    /// reflects document order. Returns the number of rows written.
    pub fn populate(&mut self, outline: &Outline) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let written = {
            let mut sink = TransactionSink { tx: &tx };
            outline.flush_to_index(&mut sink)?
        };
        tx.commit()?;
        Ok(written)
    }
}

struct TransactionSink<'a> {
    tx: &'a Transaction<'a>,
}

impl IndexSink for TransactionSink<'_> {
    fn insert(&mut self, name: &str, entry_type: &str, path: &str) -> Result<()> {
        self.tx.execute(
            "INSERT INTO searchIndex(name, type, path) VALUES (?1, ?2, ?3)",
            params![name, entry_type, path],
        )?;
        Ok(())
    }
}
