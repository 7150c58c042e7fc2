//! Blog Module
//!
//! Article storage and the `/blog` pages.
//!
//! - **`db`** - article queries (author joined in)
//! - **`types`** - form bodies
//! - **`handlers`** - list, detail and create handlers

pub mod db;
pub mod handlers;
pub mod types;

pub use db::Article;
pub use handlers::{article_detail, blog_index, create_article_form, submit_article};
