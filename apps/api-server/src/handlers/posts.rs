//! Post handlers - the service layer between HTTP and the store.
//!
//! Id parsing, required-field validation and partial-update merging happen
//! here; the store only ever sees well-formed records.

use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_shared::dto::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

fn validate(req: &CreatePostRequest) -> Result<(), AppError> {
    let required = [
        ("title", &req.title),
        ("content", &req.content),
        ("author", &req.author),
    ];

    for (field, value) in required {
        if value.is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
    }

    Ok(())
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let posts: Vec<PostResponse> = state
        .posts
        .get_all()
        .await
        .into_iter()
        .map(to_response)
        .collect();

    HttpResponse::Ok().json(posts)
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate(&req)?;

    let post = Post::new(req.title, req.content, req.author);
    let created = state.posts.create(post).await?;

    Ok(HttpResponse::Created().json(to_response(created)))
}

/// PUT /posts/{id}
///
/// Partial update: absent or empty payload fields keep their stored values.
/// A consequence is that a field cannot be cleared to the empty string.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    let mut existing = state.posts.get(id).await?;

    if let Some(title) = req.title.filter(|v| !v.is_empty()) {
        existing.title = title;
    }
    if let Some(content) = req.content.filter(|v| !v.is_empty()) {
        existing.content = content;
    }
    if let Some(author) = req.author.filter(|v| !v.is_empty()) {
        existing.author = author;
    }
    existing.touch();

    let updated = state.posts.update(id, existing).await?;

    Ok(HttpResponse::Ok().json(to_response(updated)))
}

/// DELETE /posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
