#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use fake::{faker::lorem::en::Sentence, faker::name::en::Name, Fake};

#[cfg(test)]
use crate::features::categories::CategoryService;
#[cfg(test)]
use crate::features::questions::models::NewQuestion;
#[cfg(test)]
use crate::features::questions::QuestionService;
#[cfg(test)]
use crate::modules::storage::MemoryTriviaStore;

/// Labels seeded by the category migration, in id order
#[cfg(test)]
pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[cfg(test)]
pub fn empty_store() -> Arc<MemoryTriviaStore> {
    Arc::new(MemoryTriviaStore::new())
}

/// Store holding the six seed categories and no questions
#[cfg(test)]
pub fn seeded_store() -> Arc<MemoryTriviaStore> {
    let store = empty_store();
    for label in SEED_CATEGORIES {
        store.add_category(label);
    }
    store
}

#[cfg(test)]
pub fn new_question(text: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: Name().fake(),
        category,
        difficulty: (1..=5).fake(),
    }
}

/// Add `count` generated questions to `category`
#[cfg(test)]
pub fn with_questions(store: &MemoryTriviaStore, category: i32, count: usize) {
    for _ in 0..count {
        let text: String = Sentence(3..8).fake();
        store.add_question(new_question(&text, category));
    }
}

#[cfg(test)]
pub fn service_for(store: Arc<MemoryTriviaStore>) -> QuestionService {
    let categories = Arc::new(CategoryService::new(store.clone()));
    QuestionService::new(store, categories)
}

#[cfg(test)]
pub fn test_server(router: Router) -> TestServer {
    TestServer::new(router).unwrap()
}
