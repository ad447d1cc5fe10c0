//! Quiz play: serve one unseen question from a category at a time.
//!
//! The quiz session lives on the client, which resends every question id it
//! has already been served.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quiz` | Next random unseen question, or none when exhausted |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
