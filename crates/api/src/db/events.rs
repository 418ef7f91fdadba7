//! Event query builders.

use sea_query::{Expr, Order, Query, SqliteQueryBuilder};

use super::tables::Events;
use super::Built;

/// Column list for event SELECT queries (row-mapper order).
fn event_columns(q: &mut sea_query::SelectStatement) -> &mut sea_query::SelectStatement {
    q.column(Events::Id)
        .column(Events::Title)
        .column(Events::Description)
        .column(Events::Date)
}

/// SELECT all events, newest date first.
pub fn list() -> Built {
    let mut q = Query::select().to_owned();
    event_columns(&mut q);
    q.from(Events::Table)
        .order_by(Events::Date, Order::Desc)
        .build(SqliteQueryBuilder)
}

/// SELECT a single event by id.
pub fn get_by_id(id: i64) -> Built {
    let mut q = Query::select().to_owned();
    event_columns(&mut q);
    q.from(Events::Table)
        .and_where(Expr::col(Events::Id).eq(id))
        .build(SqliteQueryBuilder)
}

/// INSERT a new event.
pub fn insert(title: &str, description: Option<&str>, date: &str) -> Built {
    Query::insert()
        .into_table(Events::Table)
        .columns([Events::Title, Events::Description, Events::Date])
        .values_panic([
            title.into(),
            description.map(|s| s.to_string()).into(),
            date.into(),
        ])
        .build(SqliteQueryBuilder)
}

/// UPDATE all mutable fields of an event. Matching zero rows is not an error.
pub fn update(id: i64, title: &str, description: Option<&str>, date: &str) -> Built {
    Query::update()
        .table(Events::Table)
        .value(Events::Title, title)
        .value(Events::Description, description.map(|s| s.to_string()))
        .value(Events::Date, date)
        .and_where(Expr::col(Events::Id).eq(id))
        .build(SqliteQueryBuilder)
}

/// DELETE an event by id. Matching zero rows is not an error.
pub fn delete(id: i64) -> Built {
    Query::delete()
        .from_table(Events::Table)
        .and_where(Expr::col(Events::Id).eq(id))
        .build(SqliteQueryBuilder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_orders_by_date_descending() {
        let (sql, values) = list();
        assert!(sql.contains("ORDER BY \"date\" DESC"), "got: {sql}");
        assert!(values.0.is_empty());
    }

    #[test]
    fn insert_binds_values_instead_of_inlining_them() {
        let hostile = "\"); DROP TABLE events; --";
        let (sql, values) = insert(hostile, None, "2025-01-01");
        assert!(!sql.contains("DROP TABLE"), "payload leaked into SQL: {sql}");
        assert_eq!(values.0.len(), 3);
    }

    #[test]
    fn update_targets_a_single_id() {
        let (sql, values) = update(3, "t", Some("d"), "2025-01-01");
        assert!(sql.contains("WHERE \"id\" ="), "got: {sql}");
        assert_eq!(values.0.len(), 4);
    }
}
