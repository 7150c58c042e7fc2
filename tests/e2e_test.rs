//! End-to-end flow: register, log in, publish, read back

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::{login, register, session, TestApp};
use pretty_assertions::assert_eq;
use techtalk::backend::blog::db::list_articles;

#[tokio::test]
async fn test_register_login_create_and_read() {
    let app = TestApp::new().await;

    register(&app, "alice", "pw123").await;
    let token = login(&app, "alice", "pw123").await;

    let home = app.server.get("/").add_cookie(session(&token)).await;
    assert_contains!(home.text(), "Signed in as <strong>alice</strong>");

    let created = app
        .server
        .post("/blog/create")
        .form(&[("title", "T"), ("content", "C")])
        .add_cookie(session(&token))
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);

    let articles = list_articles(&app.state.db).await.unwrap();
    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.author_username, "alice");

    let detail = app.server.get(&format!("/blog/{}", article.id)).await;
    assert_eq!(detail.status_code(), StatusCode::OK);
    assert_contains!(detail.text(), "<h1>T</h1>");
    assert_contains!(detail.text(), ">C</div>");
    assert_contains!(detail.text(), "by alice");

    let logout = app.server.get("/logout").add_cookie(session(&token)).await;
    assert_eq!(logout.status_code(), StatusCode::SEE_OTHER);
}
