//! Everything needed to declare models and query them, from one import.
//!
//! ```ignore
//! use sea_ease::prelude::*;
//!
//! let drafts = select::<post::Entity>()
//!     .filter(and([post::Column::AuthorId.eq(1), post::Column::Published.eq(false)]))
//!     .order_by(post::Column::CreatedAt, Order::Desc)
//!     .all(&*session)
//!     .await?;
//! ```

// Facade
pub use crate::{
    db::{options::EngineOptions, session::DbSession, Db, Metadata},
    error::Error,
};

// Data types
pub use sea_orm::entity::prelude::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ColumnType, Date, DateTime, DateTimeUtc,
    DateTimeWithTimeZone, DeriveEntityModel, DerivePrimaryKey, DeriveRelation, EntityTrait,
    EnumIter, Json, ModelTrait, PrimaryKeyTrait, Time,
};
#[cfg(feature = "decimal")]
pub use sea_orm::entity::prelude::Decimal;
pub use sea_orm::{ActiveValue, ColumnDef, IntoActiveModel, Value};

// Logic and boolean operators
pub use sea_orm::sea_query::IntoCondition;
pub use sea_orm::Condition;

// SQL functions (count, max, min, now, ...)
pub use sea_orm::sea_query::{Expr, Func};

// Query execution
pub use sea_orm::{
    ConnectionTrait, DbErr, DeleteMany, PaginatorTrait, QueryFilter, QuerySelect, Select,
    TransactionTrait, UpdateMany,
};

// Ordering
pub use sea_orm::{Order, QueryOrder};

// Relationships and constraints
pub use sea_orm::entity::prelude::{Related, RelationDef, RelationTrait};
pub use sea_orm::sea_query::{ForeignKey, Index, Table};
pub use sea_orm::{ForeignKeyAction, Linked, Schema};

/// Conditions that must all hold (`AND`).
pub fn and<I>(conditions: I) -> Condition
where
    I: IntoIterator,
    I::Item: IntoCondition,
{
    conditions.into_iter().fold(Condition::all(), Condition::add)
}

/// Conditions of which at least one must hold (`OR`).
pub fn or<I>(conditions: I) -> Condition
where
    I: IntoIterator,
    I::Item: IntoCondition,
{
    conditions.into_iter().fold(Condition::any(), Condition::add)
}

/// Negates a condition (`NOT`).
pub fn not<C: IntoCondition>(condition: C) -> Condition {
    condition.into_condition().not()
}

/// `SELECT` over an entity.
pub fn select<E: EntityTrait>() -> Select<E> {
    E::find()
}

/// `UPDATE` over every row of an entity matching the filters added to it.
pub fn update<E: EntityTrait>() -> UpdateMany<E> {
    E::update_many()
}

/// `DELETE` over every row of an entity matching the filters added to it.
pub fn delete<E: EntityTrait>() -> DeleteMany<E> {
    E::delete_many()
}
