use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rusqlite::{params_from_iter, OptionalExtension};

use chatpyy_api::{
    db, CreateEventRequest, CreatedResponse, EventResponse, MessageResponse, UpdateEventRequest,
};

use crate::error::ApiErr;
use crate::storage::{bind_values, event_from_row, Db};

// ---------------------------------------------------------------------------
// List events
// ---------------------------------------------------------------------------

/// GET /api/events — all events, newest date first.
pub async fn list_events(State(db): State<Db>) -> Result<Json<Vec<EventResponse>>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::events::list();

    let mut stmt = conn
        .prepare(&sql)
        .map_err(ApiErr::storage("prepare events"))?;

    let events: Vec<EventResponse> = stmt
        .query_map(params_from_iter(bind_values(values)), event_from_row)
        .map_err(ApiErr::storage("list events"))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(Json(events))
}

// ---------------------------------------------------------------------------
// Get event
// ---------------------------------------------------------------------------

/// GET /api/events/:id — a single event, or JSON `null` when no row matches.
///
/// The missing-row case responds 200 with `null` rather than 404, preserving
/// the original backend's behavior of serializing an absent result as-is.
pub async fn get_event(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Option<EventResponse>>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::events::get_by_id(id);

    let event = conn
        .query_row(&sql, params_from_iter(bind_values(values)), event_from_row)
        .optional()
        .map_err(ApiErr::storage("get event"))?;

    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// Create event
// ---------------------------------------------------------------------------

/// POST /api/events — insert an event, return the generated id.
pub async fn create_event(
    State(db): State<Db>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::events::insert(&req.title, req.description.as_deref(), &req.date);

    conn.execute(&sql, params_from_iter(bind_values(values)))
        .map_err(ApiErr::storage("insert event"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: conn.last_insert_rowid(),
            message: "Event created successfully".to_string(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Update event
// ---------------------------------------------------------------------------

/// PUT /api/events/:id — overwrite all mutable fields.
///
/// An id matching zero rows still acknowledges success; callers cannot tell
/// the two cases apart, which is the original contract.
pub async fn update_event(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<MessageResponse>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::events::update(id, &req.title, req.description.as_deref(), &req.date);

    conn.execute(&sql, params_from_iter(bind_values(values)))
        .map_err(ApiErr::storage("update event"))?;

    Ok(Json(MessageResponse {
        message: "Event updated successfully".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Delete event
// ---------------------------------------------------------------------------

/// DELETE /api/events/:id — remove an event. Zero rows matched is still success.
pub async fn delete_event(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::events::delete(id);

    conn.execute(&sql, params_from_iter(bind_values(values)))
        .map_err(ApiErr::storage("delete event"))?;

    Ok(Json(MessageResponse {
        message: "Event deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_db;

    async fn create(db: &Db, title: &str, description: Option<&str>, date: &str) -> i64 {
        let (status, Json(created)) = create_event(
            State(db.clone()),
            Json(CreateEventRequest {
                title: title.to_string(),
                description: description.map(|s| s.to_string()),
                date: date.to_string(),
            }),
        )
        .await
        .expect("create event");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.message, "Event created successfully");
        created.id
    }

    #[tokio::test]
    async fn created_event_is_readable_by_id() {
        let (_dir, db) = test_db();
        let id = create(&db, "standup", Some("daily sync"), "2025-03-01 09:00:00").await;

        let Json(found) = get_event(State(db.clone()), Path(id))
            .await
            .expect("get event");
        let event = found.expect("event should exist");
        assert_eq!(event.id, id);
        assert_eq!(event.title, "standup");
        assert_eq!(event.description.as_deref(), Some("daily sync"));
        assert_eq!(event.date, "2025-03-01 09:00:00");
    }

    #[tokio::test]
    async fn missing_event_reads_as_null() {
        let (_dir, db) = test_db();
        let Json(found) = get_event(State(db.clone()), Path(999))
            .await
            .expect("get event");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_by_date_descending() {
        let (_dir, db) = test_db();
        create(&db, "oldest", None, "2024-01-01 08:00:00").await;
        create(&db, "newest", None, "2026-01-01 08:00:00").await;
        create(&db, "middle", None, "2025-01-01 08:00:00").await;

        let Json(events) = list_events(State(db.clone())).await.expect("list events");
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let (_dir, db) = test_db();
        let id = create(&db, "draft", Some("tbd"), "2025-03-01 09:00:00").await;

        let Json(ack) = update_event(
            State(db.clone()),
            Path(id),
            Json(UpdateEventRequest {
                title: "final".to_string(),
                description: None,
                date: "2025-03-02 10:00:00".to_string(),
            }),
        )
        .await
        .expect("update event");
        assert_eq!(ack.message, "Event updated successfully");

        let Json(found) = get_event(State(db.clone()), Path(id))
            .await
            .expect("get event");
        let event = found.expect("event should exist");
        assert_eq!(event.title, "final");
        assert!(event.description.is_none());
        assert_eq!(event.date, "2025-03-02 10:00:00");
    }

    #[tokio::test]
    async fn update_of_missing_id_still_acknowledges() {
        let (_dir, db) = test_db();
        let Json(ack) = update_event(
            State(db.clone()),
            Path(999),
            Json(UpdateEventRequest {
                title: "ghost".to_string(),
                description: None,
                date: "2025-01-01 00:00:00".to_string(),
            }),
        )
        .await
        .expect("update must not fail on missing id");
        assert_eq!(ack.message, "Event updated successfully");
    }

    #[tokio::test]
    async fn delete_of_missing_id_still_acknowledges() {
        let (_dir, db) = test_db();
        let Json(ack) = delete_event(State(db.clone()), Path(999))
            .await
            .expect("delete must not fail on missing id");
        assert_eq!(ack.message, "Event deleted successfully");
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (_dir, db) = test_db();
        let id = create(&db, "temp", None, "2025-03-01 09:00:00").await;

        delete_event(State(db.clone()), Path(id))
            .await
            .expect("delete event");

        let Json(found) = get_event(State(db.clone()), Path(id))
            .await
            .expect("get event");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn hostile_title_is_stored_verbatim_not_executed() {
        let (_dir, db) = test_db();
        let hostile = "\"); DROP TABLE events; --";
        let id = create(&db, hostile, None, "2025-03-01 09:00:00").await;

        let Json(found) = get_event(State(db.clone()), Path(id))
            .await
            .expect("events table must survive");
        assert_eq!(found.expect("event should exist").title, hostile);
    }
}
