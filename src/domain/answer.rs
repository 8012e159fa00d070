/// Top-ranked knowledge-base match for a question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub answer_text: String,
    pub score: f64,
    pub matched_questions: Vec<String>,
}

impl AnswerResult {
    pub fn new(answer_text: impl Into<String>, score: f64, matched_questions: Vec<String>) -> Self {
        Self {
            answer_text: answer_text.into(),
            score,
            matched_questions,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.answer_text.trim().is_empty()
    }
}

/// Confidence gate applied to knowledge-base answers before they are sent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnswerPolicy {
    pub min_score: Option<f64>,
}

impl AnswerPolicy {
    pub fn new(min_score: Option<f64>) -> Self {
        Self { min_score }
    }

    pub fn accepts(&self, answer: &AnswerResult) -> bool {
        if answer.is_blank() {
            return false;
        }
        self.min_score.is_none_or(|min| answer.score >= min)
    }
}
