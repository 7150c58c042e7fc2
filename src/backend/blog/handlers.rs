/**
 * Blog Handlers
 *
 * - `GET /blog` - article list
 * - `GET /blog/{id}` - article detail, 404 when absent
 * - `GET /blog/create` - submission form (open to anyone)
 * - `POST /blog/create` - create an article (requires a valid session)
 *
 * The POST handler takes `AuthUser` before `Form`, so an unauthenticated
 * request is rejected with 401 before its body is read.
 */

use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use minijinja::context;

use crate::backend::blog::db;
use crate::backend::blog::types::NewArticleForm;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, CurrentUser};
use crate::backend::server::state::AppState;

/// List all articles
pub async fn blog_index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    let articles = db::list_articles(&state.db).await?;

    state.templates.render(
        "blog.html",
        context! { title => "Blog", current_user => user, articles => articles },
    )
}

/// Show a single article
///
/// # Errors
///
/// * `404 Not Found` - no article with this id
pub async fn article_detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Html<String>, BackendError> {
    let article = db::find_article(&state.db, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Article not found"))?;

    state.templates.render(
        "article_detail.html",
        context! { title => article.title.clone(), current_user => user, article => article },
    )
}

/// Render the article submission form
pub async fn create_article_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    state
        .templates
        .render("create_article.html", context! { title => "Create Article", current_user => user })
}

/// Create an article authored by the session user
pub async fn submit_article(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Form(form): Form<NewArticleForm>,
) -> Result<Html<String>, BackendError> {
    let article = db::create_article(&state.db, &user, &form.title, &form.content).await?;
    tracing::info!("Article {} created by {}", article.id, user.username);

    state.templates.render(
        "create_article_success.html",
        context! { title => "Article Created", current_user => user, article => article },
    )
}
