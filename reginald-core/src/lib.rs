//! Reginald Core - a fluent administrative query builder
//!
//! This crate provides the query-construction layer of a database client:
//! database- and table-level administrative operations declared through a
//! fluent API and compiled into immutable wire envelopes. Transmission of
//! those envelopes, and the data query language itself, live in other
//! crates.

pub mod builder;
pub mod error;
pub mod validate;
pub mod value;
pub mod wire;

// Re-export main types
pub use builder::{
    AdminQuery, CompileQuery, CreateTableSpec, Database, IntoArgs, Table, DEFAULT_DATACENTER,
    DEFAULT_PRIMARY_KEY,
};
pub use error::{Error, Result};
pub use value::Value;

/// Create a database with the given name
pub fn create_database(args: impl IntoArgs) -> Result<AdminQuery> {
    let args = args.into_args();
    validate::arity("create_database", &args, 1)?;
    let db_name = validate::string("create_database", &args[0])?;

    Ok(AdminQuery::CreateDatabase { db_name })
}

/// Drop the database with the given name
pub fn drop_database(args: impl IntoArgs) -> Result<AdminQuery> {
    let args = args.into_args();
    validate::arity("drop_database", &args, 1)?;
    let db_name = validate::string("drop_database", &args[0])?;

    Ok(AdminQuery::DropDatabase { db_name })
}

/// List all databases
pub fn list_databases() -> AdminQuery {
    AdminQuery::ListDatabases
}

/// Get a reference to a named database, scoping table-level operations
pub fn database(args: impl IntoArgs) -> Result<Database> {
    let args = args.into_args();
    validate::arity("database", &args, 1)?;
    let name = validate::string("database", &args[0])?;

    Ok(Database::new(name))
}
