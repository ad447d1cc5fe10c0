pub mod question_handler;

pub use question_handler::{
    __path_create_question, __path_delete_question, __path_list_questions,
    __path_list_questions_by_category, __path_search_questions, create_question,
    delete_question, list_questions, list_questions_by_category, search_questions,
};
