//! Question bank: listing, search, category filter, create and delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of questions with the category map |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/search` | Case-insensitive search over question text |
//! | GET | `/categories/{id}/questions?page=N` | Page of questions in one category |
//!
//! Pages hold [`QUESTIONS_PER_PAGE`](crate::shared::constants::QUESTIONS_PER_PAGE)
//! questions ordered by id.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
