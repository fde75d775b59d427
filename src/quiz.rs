//! Chapter quiz: a fixed question bank and the transient answer state
//! for one visit to the quiz page.

#[derive(Clone, PartialEq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

pub fn questions() -> Vec<Question> {
    vec![
        Question {
            prompt: "What is the union of sets A = {1, 2, 3} and B = {3, 4, 5}?",
            options: ["{3}", "{1, 2, 3, 4, 5}", "{1, 2, 4, 5}", "{1, 2, 3}"],
            correct: 1,
            explanation: "The union A ∪ B contains all elements that are in A or B or both, without repetition.",
        },
        Question {
            prompt: "If A ⊆ B and B ⊆ A, what can we conclude?",
            options: ["A ∩ B = ∅", "A = B", "A ∪ B = ∅", "|A| ≠ |B|"],
            correct: 1,
            explanation: "If A is a subset of B AND B is a subset of A, then A and B contain exactly the same elements, so A = B.",
        },
        Question {
            prompt: "What is the cardinality of the power set of {a, b, c}?",
            options: ["3", "6", "8", "9"],
            correct: 2,
            explanation: "The power set of a set with n elements has 2ⁿ elements. Since |{a,b,c}| = 3, |P({a,b,c})| = 2³ = 8.",
        },
        Question {
            prompt: "Which of the following represents the empty set?",
            options: ["{0}", "{∅}", "∅", "{ }"],
            correct: 2,
            explanation: "The empty set is denoted by ∅ or { }. Note that {∅} contains one element (the empty set itself).",
        },
        Question {
            prompt: "If A = {x | x is an even number between 1 and 10}, what is A?",
            options: [
                "{2, 4, 6, 8}",
                "{1, 3, 5, 7, 9}",
                "{2, 4, 6, 8, 10}",
                "{0, 2, 4, 6, 8, 10}",
            ],
            correct: 0,
            explanation: "Even numbers between 1 and 10 (exclusive) are 2, 4, 6, and 8.",
        },
    ]
}

/// Per-visit quiz state: one optional selection per question plus the
/// submitted flag. Everything here is recomputed UI state; nothing
/// survives leaving the page.
#[derive(Clone, PartialEq)]
pub struct QuizState {
    answers: Vec<Option<usize>>,
    submitted: bool,
}

impl QuizState {
    pub fn new(total: usize) -> Self {
        Self {
            answers: vec![None; total],
            submitted: false,
        }
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Records an answer. Ignored after submission and for out-of-range
    /// question indices.
    pub fn select(&mut self, question: usize, option: usize) {
        if self.submitted {
            return;
        }
        if let Some(slot) = self.answers.get_mut(question) {
            *slot = Some(option);
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn all_answered(&self) -> bool {
        self.answered_count() == self.answers.len()
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn reset(&mut self) {
        for slot in &mut self.answers {
            *slot = None;
        }
        self.submitted = false;
    }

    pub fn score(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.selected(*i) == Some(q.correct))
            .count()
    }

    pub fn percentage(&self, questions: &[Question]) -> u32 {
        if questions.is_empty() {
            return 0;
        }
        let ratio = self.score(questions) as f64 / questions.len() as f64;
        (ratio * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_correct_scores_full_marks() {
        let qs = questions();
        let mut state = QuizState::new(qs.len());
        for (i, q) in qs.iter().enumerate() {
            state.select(i, q.correct);
        }
        state.submit();
        assert_eq!(state.score(&qs), qs.len());
        assert_eq!(state.percentage(&qs), 100);
    }

    #[test]
    fn wrong_and_missing_answers_earn_nothing() {
        let qs = questions();
        let mut state = QuizState::new(qs.len());
        // One correct, one wrong, rest unanswered.
        state.select(0, qs[0].correct);
        state.select(1, (qs[1].correct + 1) % 4);
        state.submit();
        assert_eq!(state.score(&qs), 1);
        assert_eq!(state.percentage(&qs), 20);
    }

    #[test]
    fn selection_is_locked_after_submit() {
        let qs = questions();
        let mut state = QuizState::new(qs.len());
        state.select(0, 3);
        state.submit();
        state.select(0, qs[0].correct);
        assert_eq!(state.selected(0), Some(3));
    }

    #[test]
    fn reset_clears_answers_and_unlocks() {
        let qs = questions();
        let mut state = QuizState::new(qs.len());
        for (i, q) in qs.iter().enumerate() {
            state.select(i, q.correct);
        }
        state.submit();
        state.reset();
        assert!(!state.submitted());
        assert_eq!(state.answered_count(), 0);
        state.select(2, 1);
        assert_eq!(state.selected(2), Some(1));
    }

    #[test]
    fn submit_gating_tracks_answered_count() {
        let qs = questions();
        let mut state = QuizState::new(qs.len());
        assert!(!state.all_answered());
        for i in 0..qs.len() {
            state.select(i, 0);
        }
        assert!(state.all_answered());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = QuizState::new(2);
        state.select(5, 0);
        assert_eq!(state.answered_count(), 0);
    }
}
