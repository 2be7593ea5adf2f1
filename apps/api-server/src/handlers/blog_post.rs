//! Blog post handlers.
//!
//! Each operation has its own route, and the combined `/blog_post` resource
//! serves all of them with the response shape picked by the action.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{BlogPostDraft, DraftMode};
use quill_core::service::{ResourceRequest, ResourceResponse};
use quill_shared::dto::BlogPostPayload;

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn draft(body: web::Json<BlogPostPayload>) -> BlogPostDraft {
    let payload = body.into_inner();
    BlogPostDraft {
        title: payload.title,
        text: payload.text,
        category: payload.category,
        website: payload.website,
        document: payload.document,
        cover: payload.cover,
    }
}

/// GET /api/blog_posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog_post_detail/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.retrieve(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/blog_post_create
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BlogPostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(draft(body)).await?;
    tracing::info!(post_id = %post.id, "Blog post created");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/blog_post_update/{id}
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BlogPostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(path.into_inner(), draft(body), DraftMode::Full)
        .await?;
    tracing::info!(post_id = %post.id, "Blog post replaced");
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/blog_post_update/{id}
pub async fn patch(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BlogPostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(path.into_inner(), draft(body), DraftMode::Partial)
        .await?;
    tracing::info!(post_id = %post.id, "Blog post updated");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/blog_post_delete/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Blog post deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/blog_post/{id}/cover
pub async fn cover(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let cover = state.posts.cover(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cover))
}

async fn dispatch(state: &AppState, request: ResourceRequest) -> AppResult<HttpResponse> {
    let action = request.action();
    let created = matches!(request, ResourceRequest::Create(_));

    let response = match state.posts.handle(request).await? {
        ResourceResponse::Many(items) => HttpResponse::Ok().json(items),
        ResourceResponse::One(item) if created => HttpResponse::Created().json(item),
        ResourceResponse::One(item) => HttpResponse::Ok().json(item),
        ResourceResponse::Empty => HttpResponse::NoContent().finish(),
    };

    tracing::debug!(?action, status = %response.status(), "Blog post resource served");
    Ok(response)
}

pub mod resource {
    //! The combined `/api/blog_post` resource.

    use super::*;

    /// GET /api/blog_post
    pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
        dispatch(&state, ResourceRequest::List).await
    }

    /// POST /api/blog_post
    pub async fn create(
        state: web::Data<AppState>,
        body: web::Json<BlogPostPayload>,
    ) -> AppResult<HttpResponse> {
        dispatch(&state, ResourceRequest::Create(draft(body))).await
    }

    /// GET /api/blog_post/{id}
    pub async fn retrieve(
        state: web::Data<AppState>,
        path: web::Path<Uuid>,
    ) -> AppResult<HttpResponse> {
        dispatch(&state, ResourceRequest::Retrieve(path.into_inner())).await
    }

    /// PUT /api/blog_post/{id}
    pub async fn update(
        state: web::Data<AppState>,
        path: web::Path<Uuid>,
        body: web::Json<BlogPostPayload>,
    ) -> AppResult<HttpResponse> {
        dispatch(&state, ResourceRequest::Update(path.into_inner(), draft(body))).await
    }

    /// PATCH /api/blog_post/{id}
    pub async fn partial_update(
        state: web::Data<AppState>,
        path: web::Path<Uuid>,
        body: web::Json<BlogPostPayload>,
    ) -> AppResult<HttpResponse> {
        dispatch(
            &state,
            ResourceRequest::PartialUpdate(path.into_inner(), draft(body)),
        )
        .await
    }

    /// DELETE /api/blog_post/{id}
    pub async fn destroy(
        state: web::Data<AppState>,
        path: web::Path<Uuid>,
    ) -> AppResult<HttpResponse> {
        dispatch(&state, ResourceRequest::Destroy(path.into_inner())).await
    }
}
