//! Note query builders.
//!
//! `created_at` is never part of an INSERT or UPDATE: the column default in
//! the schema sets it once, at insertion time.

use sea_query::{Expr, Order, Query, SqliteQueryBuilder};

use super::tables::Notes;
use super::Built;

/// Column list for note SELECT queries (row-mapper order).
fn note_columns(q: &mut sea_query::SelectStatement) -> &mut sea_query::SelectStatement {
    q.column(Notes::Id)
        .column(Notes::Title)
        .column(Notes::Content)
        .column(Notes::ImageUrl)
        .column(Notes::IsPrivate)
        .column(Notes::SharedWith)
        .column(Notes::CreatedAt)
}

/// SELECT all notes, newest first.
pub fn list() -> Built {
    let mut q = Query::select().to_owned();
    note_columns(&mut q);
    q.from(Notes::Table)
        .order_by(Notes::CreatedAt, Order::Desc)
        .build(SqliteQueryBuilder)
}

/// INSERT a new note.
pub fn insert(
    title: &str,
    content: &str,
    image_url: Option<&str>,
    is_private: bool,
    shared_with: &str,
) -> Built {
    Query::insert()
        .into_table(Notes::Table)
        .columns([
            Notes::Title,
            Notes::Content,
            Notes::ImageUrl,
            Notes::IsPrivate,
            Notes::SharedWith,
        ])
        .values_panic([
            title.into(),
            content.into(),
            image_url.map(|s| s.to_string()).into(),
            is_private.into(),
            shared_with.into(),
        ])
        .build(SqliteQueryBuilder)
}

/// UPDATE all mutable fields of a note. Matching zero rows is not an error.
pub fn update(
    id: i64,
    title: &str,
    content: &str,
    image_url: Option<&str>,
    is_private: bool,
    shared_with: &str,
) -> Built {
    Query::update()
        .table(Notes::Table)
        .value(Notes::Title, title)
        .value(Notes::Content, content)
        .value(Notes::ImageUrl, image_url.map(|s| s.to_string()))
        .value(Notes::IsPrivate, is_private)
        .value(Notes::SharedWith, shared_with)
        .and_where(Expr::col(Notes::Id).eq(id))
        .build(SqliteQueryBuilder)
}

/// DELETE a note by id. Matching zero rows is not an error.
pub fn delete(id: i64) -> Built {
    Query::delete()
        .from_table(Notes::Table)
        .and_where(Expr::col(Notes::Id).eq(id))
        .build(SqliteQueryBuilder)
}
