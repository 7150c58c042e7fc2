/**
 * Article Database Operations
 *
 * Articles are inserted once and never updated or deleted. Reads always join
 * the author so templates can show `author_username` without a second query.
 */

use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::auth::users::User;

/// Article read model with the author's username joined in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_username: String,
}

/// Insert an article written by `author`
pub async fn create_article(
    pool: &SqlitePool,
    author: &User,
    title: &str,
    content: &str,
) -> Result<Article, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO articles (title, content, author_id)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(author.id)
    .fetch_one(pool)
    .await?;

    Ok(Article {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author_id: author.id,
        author_username: author.username.clone(),
    })
}

/// All articles, newest first
pub async fn list_articles(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
    let articles = sqlx::query_as::<_, Article>(
        r#"
        SELECT a.id, a.title, a.content, a.author_id, u.username AS author_username
        FROM articles a
        JOIN users u ON u.id = a.author_id
        ORDER BY a.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(articles)
}

/// Get article by ID
///
/// # Returns
/// Article or None if not found
pub async fn find_article(pool: &SqlitePool, id: i64) -> Result<Option<Article>, sqlx::Error> {
    let article = sqlx::query_as::<_, Article>(
        r#"
        SELECT a.id, a.title, a.content, a.author_id, u.username AS author_username
        FROM articles a
        JOIN users u ON u.id = a.author_id
        WHERE a.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(article)
}
