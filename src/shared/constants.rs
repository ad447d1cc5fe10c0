/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: i64 = 10;
