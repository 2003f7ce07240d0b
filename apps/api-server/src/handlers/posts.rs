//! Guestbook post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use guestbook_core::GuestBookService;
use guestbook_shared::dto::{NewPostRequest, NewPostResponse, NewReplyRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let service = GuestBookService::new(state.posts.clone());
    let posts = service.get_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let service = GuestBookService::new(state.posts.clone());

    // An absent post is a successful lookup; only the boundary turns it
    // into a 404.
    match service.find_post_by_id(post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("Post {} not found", post_id))),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<NewPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.name.is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }
    if req.message.is_empty() {
        return Err(AppError::BadRequest(
            "Message must not be empty".to_string(),
        ));
    }

    let service = GuestBookService::new(state.posts.clone());
    let post = service.add_new_post(req.name, req.message, None).await?;

    // The image itself arrives later through the file store; hand out an
    // upload URL when the client announced one.
    let file_upload_url = match req.image_file_name.as_deref() {
        Some(file_name) if !file_name.is_empty() => Some(
            state
                .upload_urls
                .issue_upload_url(post.id, file_name)
                .map_err(|e| AppError::Internal(e.to_string()))?,
        ),
        _ => None,
    };

    Ok(HttpResponse::Created().json(NewPostResponse {
        post,
        file_upload_url,
    }))
}

/// POST /api/posts/{post_id}/replies
pub async fn create_reply(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<NewReplyRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    if req.replyer_name.is_empty() {
        return Err(AppError::BadRequest(
            "Replyer name must not be empty".to_string(),
        ));
    }
    if req.reply_message.is_empty() {
        return Err(AppError::BadRequest(
            "Reply message must not be empty".to_string(),
        ));
    }

    let service = GuestBookService::new(state.posts.clone());
    service
        .add_new_reply_to_post(post_id, req.replyer_name, req.reply_message)
        .await?;

    Ok(HttpResponse::Created().finish())
}

/// DELETE /api/posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let service = GuestBookService::new(state.posts.clone());

    service.remove_post(post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
