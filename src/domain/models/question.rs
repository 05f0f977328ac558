use serde::{Deserialize, Serialize};

/// Entry of the shared question catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
}

/// Per-user copy of a catalog question with spaced-repetition counters.
///
/// `next` is the index of the following entry in the owning user's list,
/// `None` for the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuestion {
    pub question: Question,
    pub memory_strength: u32,
    pub attempts: u32,
    pub passed: u32,
    pub next: Option<usize>,
}

impl UserQuestion {
    pub const INITIAL_MEMORY_STRENGTH: u32 = 1;

    fn fresh(question: Question, next: Option<usize>) -> Self {
        Self {
            question,
            memory_strength: Self::INITIAL_MEMORY_STRENGTH,
            attempts: 0,
            passed: 0,
            next,
        }
    }
}

/// Snapshot the catalog into a new user's question list, linked in catalog order
pub fn seed_user_questions(catalog: Vec<Question>) -> Vec<UserQuestion> {
    let len = catalog.len();
    catalog
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            let next = (index + 1 < len).then_some(index + 1);
            UserQuestion::fresh(question, next)
        })
        .collect()
}
