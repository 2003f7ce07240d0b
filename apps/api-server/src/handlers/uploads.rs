//! Upload completion handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use guestbook_core::GuestBookService;
use guestbook_shared::dto::{UploadEventBatch, UploadEventsResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/uploads/events
///
/// Ingests upload completion notifications from the file store. Records that
/// are not object creations, or whose key does not parse, are logged and
/// skipped; one bad record never fails the batch.
pub async fn uploads_completed(
    state: web::Data<AppState>,
    body: web::Json<UploadEventBatch>,
) -> AppResult<HttpResponse> {
    let batch = body.into_inner();
    let mut processed = 0usize;

    for record in &batch.records {
        if !record.event_name.starts_with("ObjectCreated:") {
            continue;
        }

        let Some((post_id, _file_name)) = parse_object_key(&record.key) else {
            tracing::warn!(key = %record.key, "Skipping upload event with malformed object key");
            continue;
        };

        let image_url = state.uploads.public_object_url(&record.bucket, &record.key);

        let service = GuestBookService::new(state.posts.clone());
        match service.image_uploaded(post_id, image_url).await {
            Ok(()) => processed += 1,
            Err(e) => {
                tracing::error!(%post_id, error = %e, "Failed to record uploaded image");
            }
        }
    }

    Ok(HttpResponse::Ok().json(UploadEventsResponse { processed }))
}

/// Object keys are `"<post_id>/<file_name>"`.
fn parse_object_key(key: &str) -> Option<(Uuid, &str)> {
    let (post_id, file_name) = key.split_once('/')?;
    let post_id = post_id.parse().ok()?;
    Some((post_id, file_name))
}
