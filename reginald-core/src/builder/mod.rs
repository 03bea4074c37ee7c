//! Query builder module

pub mod common;
pub mod database;
pub mod meta;
pub mod table;

// Re-export types from submodules
pub use common::{CompileQuery, IntoArgs};
pub use database::Database;
pub use meta::{AdminQuery, CreateTableSpec, DEFAULT_DATACENTER, DEFAULT_PRIMARY_KEY};
pub use table::Table;
