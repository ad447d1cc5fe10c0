mod question_dto;

pub use question_dto::{
    CategoryQuestionsDto, CreateQuestionDto, DeleteQuestionResponseDto, QuestionPageDto,
    QuestionResponseDto, SearchQuestionsDto, SearchRequestDto,
};
