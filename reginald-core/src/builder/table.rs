//! Table handles

use crate::wire;

/// A handle to a table within a database.
///
/// Construction lives here; the data query language built on top of the
/// handle (selection, insertion, filtering) is a separate layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    db_name: String,
    table_name: String,
}

impl Table {
    pub(crate) fn new(db_name: String, table_name: String) -> Self {
        Self {
            db_name,
            table_name,
        }
    }

    /// The table name
    pub fn name(&self) -> &str {
        &self.table_name
    }

    /// The database this table belongs to
    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// The wire reference naming this table
    pub fn table_ref(&self) -> wire::TableRef {
        wire::TableRef {
            db_name: self.db_name.clone(),
            table_name: self.table_name.clone(),
        }
    }
}
