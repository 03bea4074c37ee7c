//! Administrative query descriptors and their compilation

use super::common::CompileQuery;
use crate::wire;

/// Primary key used when table creation does not name one
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Datacenter tag attached to every CREATE_TABLE.
///
/// The server currently accepts only this placement tag; the builder does
/// not take it from the caller. Revisit once placement becomes selectable.
pub const DEFAULT_DATACENTER: &str = "Welcome-dc";

/// Everything needed to create a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableSpec {
    pub data_center: String,
    pub db_name: String,
    pub table_name: String,
    pub primary_key: String,
}

impl CreateTableSpec {
    /// Build a spec with defaults applied: the fixed datacenter tag, and
    /// `"id"` as the primary key when none is supplied
    pub fn new(db_name: String, table_name: String, primary_key: Option<String>) -> Self {
        Self {
            data_center: DEFAULT_DATACENTER.to_string(),
            db_name,
            table_name,
            primary_key: primary_key.unwrap_or_else(|| DEFAULT_PRIMARY_KEY.to_string()),
        }
    }
}

/// An administrative operation, validated and ready to compile.
///
/// One variant per operation the server understands. Variants are plain
/// immutable values; nothing mutates after construction, so a descriptor
/// may be compiled any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminQuery {
    /// Create a database with the given name
    CreateDatabase { db_name: String },
    /// Drop the database with the given name
    DropDatabase { db_name: String },
    /// List all databases
    ListDatabases,
    /// List all tables in the given database
    ListTables { db_name: String },
    /// Create a table
    CreateTable(CreateTableSpec),
    /// Drop a table
    DropTable {
        db_name: String,
        table_name: String,
    },
}

impl CompileQuery for AdminQuery {
    fn compile(&self) -> wire::Query {
        let meta = match self {
            AdminQuery::CreateDatabase { db_name } => {
                let mut meta = wire::MetaQuery::new(wire::MetaQueryKind::CreateDb);
                meta.db_name = Some(db_name.clone());
                meta
            }
            AdminQuery::DropDatabase { db_name } => {
                let mut meta = wire::MetaQuery::new(wire::MetaQueryKind::DropDb);
                meta.db_name = Some(db_name.clone());
                meta
            }
            AdminQuery::ListDatabases => wire::MetaQuery::new(wire::MetaQueryKind::ListDbs),
            AdminQuery::ListTables { db_name } => {
                let mut meta = wire::MetaQuery::new(wire::MetaQueryKind::ListTables);
                meta.db_name = Some(db_name.clone());
                meta
            }
            AdminQuery::CreateTable(spec) => {
                let mut meta = wire::MetaQuery::new(wire::MetaQueryKind::CreateTable);
                meta.create_table = Some(wire::CreateTable {
                    data_center: spec.data_center.clone(),
                    table_ref: wire::TableRef {
                        db_name: spec.db_name.clone(),
                        table_name: spec.table_name.clone(),
                    },
                    primary_key: spec.primary_key.clone(),
                });
                meta
            }
            AdminQuery::DropTable {
                db_name,
                table_name,
            } => {
                let mut meta = wire::MetaQuery::new(wire::MetaQueryKind::DropTable);
                meta.drop_table = Some(wire::TableRef {
                    db_name: db_name.clone(),
                    table_name: table_name.clone(),
                });
                meta
            }
        };

        wire::Query::meta(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_database_envelope() {
        let query = AdminQuery::CreateDatabase {
            db_name: "blog".to_string(),
        };
        let envelope = query.compile();
        assert_eq!(envelope.kind, wire::QueryKind::Meta);
        assert_eq!(envelope.meta_query.kind, wire::MetaQueryKind::CreateDb);
        assert_eq!(envelope.meta_query.db_name.as_deref(), Some("blog"));
        assert!(envelope.meta_query.create_table.is_none());
        assert!(envelope.meta_query.drop_table.is_none());
    }

    #[test]
    fn test_drop_database_envelope() {
        let query = AdminQuery::DropDatabase {
            db_name: "blog".to_string(),
        };
        let envelope = query.compile();
        assert_eq!(envelope.meta_query.kind, wire::MetaQueryKind::DropDb);
        assert_eq!(envelope.meta_query.db_name.as_deref(), Some("blog"));
    }

    #[test]
    fn test_list_databases_has_no_db_name() {
        let envelope = AdminQuery::ListDatabases.compile();
        assert_eq!(envelope.meta_query.kind, wire::MetaQueryKind::ListDbs);
        assert!(envelope.meta_query.db_name.is_none());
    }

    #[test]
    fn test_list_tables_envelope() {
        let query = AdminQuery::ListTables {
            db_name: "blog".to_string(),
        };
        let envelope = query.compile();
        assert_eq!(envelope.meta_query.kind, wire::MetaQueryKind::ListTables);
        assert_eq!(envelope.meta_query.db_name.as_deref(), Some("blog"));
    }

    #[test]
    fn test_create_table_envelope() {
        let query = AdminQuery::CreateTable(CreateTableSpec::new(
            "blog".to_string(),
            "posts".to_string(),
            None,
        ));
        let envelope = query.compile();
        assert_eq!(envelope.meta_query.kind, wire::MetaQueryKind::CreateTable);
        let create = envelope.meta_query.create_table.unwrap();
        assert_eq!(create.data_center, DEFAULT_DATACENTER);
        assert_eq!(create.table_ref.db_name, "blog");
        assert_eq!(create.table_ref.table_name, "posts");
        assert_eq!(create.primary_key, DEFAULT_PRIMARY_KEY);
    }

    #[test]
    fn test_create_table_spec_keeps_supplied_key() {
        let spec = CreateTableSpec::new(
            "blog".to_string(),
            "posts".to_string(),
            Some("slug".to_string()),
        );
        assert_eq!(spec.primary_key, "slug");
    }

    #[test]
    fn test_drop_table_envelope() {
        let query = AdminQuery::DropTable {
            db_name: "blog".to_string(),
            table_name: "posts".to_string(),
        };
        let envelope = query.compile();
        assert_eq!(envelope.meta_query.kind, wire::MetaQueryKind::DropTable);
        assert_eq!(
            envelope.meta_query.drop_table,
            Some(wire::TableRef {
                db_name: "blog".to_string(),
                table_name: "posts".to_string(),
            })
        );
    }

    #[test]
    fn test_compile_is_idempotent() {
        let query = AdminQuery::CreateTable(CreateTableSpec::new(
            "blog".to_string(),
            "posts".to_string(),
            Some("slug".to_string()),
        ));
        assert_eq!(query.compile(), query.compile());
    }
}
