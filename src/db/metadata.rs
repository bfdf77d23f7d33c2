//! Registry of models managed by [`crate::Db::create_all`] and [`crate::Db::drop_all`].

use std::sync::{PoisonError, RwLock};

use sea_orm::{
    sea_query::{IndexCreateStatement, Table, TableCreateStatement, TableDropStatement},
    EntityTrait, Schema,
};

struct TableEntry {
    name: String,
    create: fn(&Schema) -> TableCreateStatement,
    indexes: fn(&Schema) -> Vec<IndexCreateStatement>,
    drop: fn() -> TableDropStatement,
}

fn create_table<E: EntityTrait>(schema: &Schema) -> TableCreateStatement {
    let mut stmt = schema.create_table_from_entity(E::default());
    stmt.if_not_exists();
    stmt
}

fn create_indexes<E: EntityTrait>(schema: &Schema) -> Vec<IndexCreateStatement> {
    schema
        .create_index_from_entity(E::default())
        .into_iter()
        .map(|mut stmt| {
            stmt.if_not_exists();
            stmt
        })
        .collect()
}

fn drop_table<E: EntityTrait>() -> TableDropStatement {
    Table::drop()
        .table(E::default().table_ref())
        .if_exists()
        .to_owned()
}

/// Statements for creating one registered table and its indexes.
pub struct CreateTable {
    pub name: String,
    pub table: TableCreateStatement,
    pub indexes: Vec<IndexCreateStatement>,
}

/// Models registered with a [`crate::Db`].
///
/// Tables are created in registration order and dropped in reverse, so a model referenced by a
/// foreign key must be registered before the model holding the key.
#[derive(Default)]
pub struct Metadata {
    tables: RwLock<Vec<TableEntry>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity. Registering a table that is already present does nothing.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use sea_ease::Db;
    /// use entity::prelude::*;
    ///
    /// Db::global().model().register(Author).register(Post);
    /// ```
    pub fn register<E: EntityTrait>(&self, entity: E) -> &Self {
        let name = entity.table_name().to_owned();
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);

        if tables.iter().any(|table| table.name == name) {
            tracing::debug!("Model for table {} is already registered", name);
            return self;
        }

        tables.push(TableEntry {
            name,
            create: create_table::<E>,
            indexes: create_indexes::<E>,
            drop: drop_table::<E>,
        });

        self
    }

    /// Names of registered tables, in registration order.
    pub fn table_names(&self) -> Vec<String> {
        self.read(|tables| tables.iter().map(|table| table.name.clone()).collect())
    }

    pub fn contains(&self, table_name: &str) -> bool {
        self.read(|tables| tables.iter().any(|table| table.name == table_name))
    }

    pub fn len(&self) -> usize {
        self.read(|tables| tables.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// CREATE statements for every registered table, in registration order.
    pub fn create_statements(&self, schema: &Schema) -> Vec<CreateTable> {
        self.read(|tables| {
            tables
                .iter()
                .map(|table| CreateTable {
                    name: table.name.clone(),
                    table: (table.create)(schema),
                    indexes: (table.indexes)(schema),
                })
                .collect()
        })
    }

    /// DROP statements for every registered table, in reverse registration order.
    pub fn drop_statements(&self) -> Vec<(String, TableDropStatement)> {
        self.read(|tables| {
            tables
                .iter()
                .rev()
                .map(|table| (table.name.clone(), (table.drop)()))
                .collect()
        })
    }

    fn read<T>(&self, f: impl FnOnce(&[TableEntry]) -> T) -> T {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        f(&tables)
    }
}

impl std::fmt::Debug for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metadata")
            .field("tables", &self.table_names())
            .finish()
    }
}
