pub mod quiz_handler;

pub use quiz_handler::{__path_next_quiz_question, next_quiz_question};
