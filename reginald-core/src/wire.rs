//! Wire envelope types
//!
//! The structured message produced by compilation and handed to the
//! transport layer. Field names and discriminants follow the server's
//! protocol schema exactly; the byte-level encoder and the connection
//! that carries the result live outside this crate.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Outer query kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryKind {
    Meta,
}

/// Administrative operation discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetaQueryKind {
    CreateDb,
    DropDb,
    ListDbs,
    ListTables,
    CreateTable,
    DropTable,
}

/// The outer wire envelope wrapping a meta-query payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(rename = "type")]
    pub kind: QueryKind,
    pub meta_query: MetaQuery,
}

impl Query {
    /// Wrap a meta-query payload in the outer envelope
    pub fn meta(meta_query: MetaQuery) -> Self {
        Self {
            kind: QueryKind::Meta,
            meta_query,
        }
    }

    /// Render the envelope as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The administrative payload of a META query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaQuery {
    #[serde(rename = "type")]
    pub kind: MetaQueryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_table: Option<CreateTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_table: Option<TableRef>,
}

impl MetaQuery {
    /// Create an empty payload of the given kind
    pub fn new(kind: MetaQueryKind) -> Self {
        Self {
            kind,
            db_name: None,
            create_table: None,
            drop_table: None,
        }
    }
}

/// CREATE_TABLE payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTable {
    pub data_center: String,
    pub table_ref: TableRef,
    pub primary_key: String,
}

/// A fully qualified table reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub db_name: String,
    pub table_name: String,
}
