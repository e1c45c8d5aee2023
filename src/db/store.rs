//! Append-only store of work orders.
//!
//! The store only knows the database path. Every operation opens its own
//! connection, runs, and drops it again before returning.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::insert_order;
use crate::errors::AppResult;
use crate::models::order::OrderDraft;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the schema if missing. Idempotent.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let pool = DbPool::new(&self.path)?;
        init_db(&pool.conn)?;
        Ok(())
    }

    /// Normalize the draft and append it as a new row.
    /// Returns the id assigned by SQLite. The draft is left untouched.
    pub fn save(&self, draft: &OrderDraft) -> AppResult<i64> {
        let order = draft.normalize();
        let pool = DbPool::new(&self.path)?;
        let id = insert_order(&pool.conn, &order)?;
        Ok(id)
    }
}
