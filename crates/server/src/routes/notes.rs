use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rusqlite::params_from_iter;

use chatpyy_api::{
    db, CreateNoteRequest, CreatedResponse, MessageResponse, NoteResponse, UpdateNoteRequest,
};

use crate::error::ApiErr;
use crate::storage::{bind_values, note_from_row, Db};

// ---------------------------------------------------------------------------
// List notes
// ---------------------------------------------------------------------------

/// GET /api/notes — all notes, newest first.
///
/// `is_private` and `shared_with` are returned but never filtered on; the
/// caller owns whatever visibility semantics those fields carry.
pub async fn list_notes(State(db): State<Db>) -> Result<Json<Vec<NoteResponse>>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::notes::list();

    let mut stmt = conn
        .prepare(&sql)
        .map_err(ApiErr::storage("prepare notes"))?;

    let notes: Vec<NoteResponse> = stmt
        .query_map(params_from_iter(bind_values(values)), note_from_row)
        .map_err(ApiErr::storage("list notes"))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(Json(notes))
}

// ---------------------------------------------------------------------------
// Create note
// ---------------------------------------------------------------------------

/// POST /api/notes — insert a note; `created_at` is set by the database.
pub async fn create_note(
    State(db): State<Db>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::notes::insert(
        &req.title,
        &req.content,
        req.image_url.as_deref(),
        req.is_private,
        &req.shared_with,
    );

    conn.execute(&sql, params_from_iter(bind_values(values)))
        .map_err(ApiErr::storage("insert note"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: conn.last_insert_rowid(),
            message: "Catatan berhasil dibuat".to_string(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Update note
// ---------------------------------------------------------------------------

/// PUT /api/notes/:id — overwrite all fields except `created_at`.
/// Zero rows matched is still success.
pub async fn update_note(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<MessageResponse>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::notes::update(
        id,
        &req.title,
        &req.content,
        req.image_url.as_deref(),
        req.is_private,
        &req.shared_with,
    );

    conn.execute(&sql, params_from_iter(bind_values(values)))
        .map_err(ApiErr::storage("update note"))?;

    Ok(Json(MessageResponse {
        message: "Catatan berhasil diperbarui".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Delete note
// ---------------------------------------------------------------------------

/// DELETE /api/notes/:id — remove a note. Zero rows matched is still success.
pub async fn delete_note(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiErr> {
    let conn = db.conn();
    let (sql, values) = db::notes::delete(id);

    conn.execute(&sql, params_from_iter(bind_values(values)))
        .map_err(ApiErr::storage("delete note"))?;

    Ok(Json(MessageResponse {
        message: "Catatan berhasil dihapus".to_string(),
    }))
}
