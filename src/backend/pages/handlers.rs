/**
 * Page Handlers
 *
 * Informational pages. Each renders one template with the optional
 * `current_user` of the request; the contact form echoes the submitted name
 * back on a thank-you page and stores nothing.
 */

use axum::{extract::State, response::Html, Form};
use minijinja::context;
use serde::Deserialize;

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::state::AppState;

/// Contact form body
#[derive(Deserialize, Debug)]
pub struct ContactForm {
    pub name: String,
}

fn render_page(
    state: &AppState,
    template: &str,
    title: &str,
    user: Option<User>,
) -> Result<Html<String>, BackendError> {
    state
        .templates
        .render(template, context! { title => title, current_user => user })
}

/// `GET /`
pub async fn home(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    render_page(&state, "index.html", "Home", user)
}

/// `GET /about`
pub async fn about(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    render_page(&state, "about.html", "About", user)
}

/// `GET /contact`
pub async fn contact_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    render_page(&state, "contact.html", "Contact", user)
}

/// `POST /contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, BackendError> {
    tracing::debug!("Contact form submitted by {}", form.name);
    state.templates.render(
        "thank_you.html",
        context! { title => "Thank You", current_user => user, name => form.name },
    )
}

/// `GET /counters`
pub async fn counters(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, BackendError> {
    render_page(&state, "counters.html", "Counters", user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::test_support::test_state;

    #[tokio::test]
    async fn test_pages_render_anonymously() {
        let state = test_state().await;

        let Html(body) = home(State(state.clone()), CurrentUser(None)).await.unwrap();
        assert!(body.contains("<title>Home"));
        assert!(body.contains("/login"));

        let Html(body) = about(State(state.clone()), CurrentUser(None)).await.unwrap();
        assert!(body.contains("<title>About"));

        let Html(body) = contact_form(State(state.clone()), CurrentUser(None)).await.unwrap();
        assert!(body.contains("name=\"name\""));

        let Html(body) = counters(State(state), CurrentUser(None)).await.unwrap();
        assert!(body.contains("<title>Counters"));
    }

    #[tokio::test]
    async fn test_home_shows_current_user() {
        let state = test_state().await;
        let user = create_user(&state.db, "alice", "alice@example.com", "hash").await.unwrap();

        let Html(body) = home(State(state), CurrentUser(Some(user))).await.unwrap();
        assert!(body.contains("alice"));
        assert!(body.contains("/logout"));
    }

    #[tokio::test]
    async fn test_contact_echoes_name() {
        let state = test_state().await;
        let form = ContactForm {
            name: "Bob".to_string(),
        };

        let Html(body) = submit_contact(State(state), CurrentUser(None), Form(form)).await.unwrap();
        assert!(body.contains("Bob"));
    }
}
