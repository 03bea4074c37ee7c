//! Database reference and its table-level operations

use super::common::IntoArgs;
use super::meta::{AdminQuery, CreateTableSpec};
use super::table::Table;
use crate::{validate, Result};

/// A reference to a named database.
///
/// Scopes table-level administrative operations. The name is expected to be
/// a non-empty identifier; that is the caller's contract and is not
/// re-checked per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    name: String,
}

impl Database {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    /// The database name this reference is scoped to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List all tables in this database
    pub fn list(&self) -> AdminQuery {
        AdminQuery::ListTables {
            db_name: self.name.clone(),
        }
    }

    /// Create a table in this database.
    ///
    /// Takes the table name and, optionally, the primary key field:
    /// `db.create("posts")` or `db.create(("posts", "slug"))`. The key
    /// defaults to `"id"` when omitted.
    pub fn create(&self, args: impl IntoArgs) -> Result<AdminQuery> {
        let args = args.into_args();
        validate::arity("create", &args, 1)?;
        let table_name = validate::string("create", &args[0])?;
        let primary_key = validate::optional_string("create", args.get(1))?;

        Ok(AdminQuery::CreateTable(CreateTableSpec::new(
            self.name.clone(),
            table_name,
            primary_key,
        )))
    }

    /// Drop a table from this database
    pub fn drop(&self, args: impl IntoArgs) -> Result<AdminQuery> {
        let args = args.into_args();
        validate::arity("drop", &args, 1)?;
        let table_name = validate::string("drop", &args[0])?;

        Ok(AdminQuery::DropTable {
            db_name: self.name.clone(),
            table_name,
        })
    }

    /// Get a handle to a table in this database.
    ///
    /// The handle is the entry point into the data query language, which
    /// lives outside this crate.
    pub fn table(&self, args: impl IntoArgs) -> Result<Table> {
        let args = args.into_args();
        validate::arity("table", &args, 1)?;
        let table_name = validate::string("table", &args[0])?;

        Ok(Table::new(self.name.clone(), table_name))
    }
}
