//! Core data models for the word-matching round.
//! `GameState` is a `yew::Reducible`; every mutation goes through `GameAction`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::util::format_elapsed;

/// Bundled word list, one entry per round step.
pub const BUNDLED_WORDS: &str = include_str!("../data/words.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub id: u32,
    /// The word the player has to find.
    pub target: String,
    /// Candidate spellings; exactly one is correct.
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl WordPair {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

#[derive(Debug)]
pub enum WordListError {
    Parse(serde_json::Error),
    Empty,
    NoChoices { id: u32 },
    CorrectIndexOutOfRange { id: u32, index: usize, len: usize },
    TargetMismatch { id: u32, target: String, choice: String },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::Parse(e) => write!(f, "word list is not valid JSON: {}", e),
            WordListError::Empty => write!(f, "word list is empty"),
            WordListError::NoChoices { id } => write!(f, "word {} has no choices", id),
            WordListError::CorrectIndexOutOfRange { id, index, len } => write!(
                f,
                "word {} marks choice {} correct but only has {} choices",
                id, index, len
            ),
            WordListError::TargetMismatch { id, target, choice } => write!(
                f,
                "word {}: correct choice {:?} does not spell target {:?}",
                id, choice, target
            ),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordListError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WordListError {
    fn from(e: serde_json::Error) -> Self {
        WordListError::Parse(e)
    }
}

/// Validated, non-empty, shared list of word pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct WordList(Rc<[WordPair]>);

impl WordList {
    pub fn parse(raw: &str) -> Result<Self, WordListError> {
        let pairs: Vec<WordPair> = serde_json::from_str(raw)?;
        Self::from_pairs(pairs)
    }

    pub fn bundled() -> Result<Self, WordListError> {
        Self::parse(BUNDLED_WORDS)
    }

    pub fn from_pairs(pairs: Vec<WordPair>) -> Result<Self, WordListError> {
        if pairs.is_empty() {
            return Err(WordListError::Empty);
        }
        for p in &pairs {
            if p.choices.is_empty() {
                return Err(WordListError::NoChoices { id: p.id });
            }
            let Some(choice) = p.choices.get(p.correct_index) else {
                return Err(WordListError::CorrectIndexOutOfRange {
                    id: p.id,
                    index: p.correct_index,
                    len: p.choices.len(),
                });
            };
            if *choice != p.target {
                return Err(WordListError::TargetMismatch {
                    id: p.id,
                    target: p.target.clone(),
                    choice: choice.clone(),
                });
            }
        }
        Ok(Self(pairs.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// A selection waiting out the feedback window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAnswer {
    /// Monotonic id; `Resolve` must carry the same id to apply.
    pub id: u32,
    pub choice: usize,
    pub feedback: Feedback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub words: WordList,
    pub config: GameConfig,
    pub current_word_index: usize,
    pub score: u32,
    /// Answers resolved so far, right or wrong.
    pub attempts: u32,
    pub correct_answers: u32,
    pub revealed_parts: u32,
    pub is_complete: bool,
    pub start_time_ms: f64,
    pub time_elapsed_ms: f64,
    /// Set for the duration of the feedback window; input is locked meanwhile.
    pub pending: Option<PendingAnswer>,
    last_answer_id: u32,
}

impl GameState {
    pub fn new(words: WordList, config: GameConfig, now_ms: f64) -> Self {
        Self {
            words,
            config,
            current_word_index: 0,
            score: 0,
            attempts: 0,
            correct_answers: 0,
            revealed_parts: 0,
            is_complete: false,
            start_time_ms: now_ms,
            time_elapsed_ms: 0.0,
            pending: None,
            last_answer_id: 0,
        }
    }

    pub fn current_word(&self) -> &WordPair {
        // index stays in range: it only advances while a next word exists
        &self.words.0[self.current_word_index]
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn total_parts(&self) -> u32 {
        self.config.total_parts
    }

    pub fn is_answering(&self) -> bool {
        self.pending.is_some()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.pending.map(|p| p.feedback)
    }

    pub fn selected_choice(&self) -> Option<usize> {
        self.pending.map(|p| p.choice)
    }

    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 100;
        }
        (self.correct_answers as f64 / self.attempts as f64 * 100.0).round() as u32
    }

    pub fn formatted_time(&self) -> String {
        format_elapsed(self.time_elapsed_ms)
    }

    fn apply_answer(&mut self, answer: PendingAnswer) {
        self.attempts = self.attempts.saturating_add(1);
        if answer.feedback == Feedback::Correct {
            self.score = self.score.saturating_add(self.config.points_per_correct);
            self.correct_answers = self.correct_answers.saturating_add(1);
            if self.revealed_parts < self.config.total_parts {
                self.revealed_parts += 1;
            }
            if self.current_word_index + 1 < self.words.len() {
                self.current_word_index += 1;
            } else {
                self.is_complete = true;
            }
        }
    }
}

/// Share of the hidden picture uncovered, 0.0..=100.0.
pub fn reveal_percent(revealed: u32, total: u32) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (revealed.min(total) as f64 / total as f64) * 100.0
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Player picked a choice; starts the feedback window.
    Select { choice: usize },
    /// Feedback window elapsed; applies the outcome of the matching answer.
    Resolve { answer_id: u32 },
    Tick { now_ms: f64 },
    Reset { now_ms: f64 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        match action {
            Select { choice } => {
                if self.is_answering() || self.is_complete {
                    return self;
                }
                let word = self.current_word();
                if choice >= word.choices.len() {
                    return self;
                }
                let feedback = if word.is_correct(choice) {
                    Feedback::Correct
                } else {
                    Feedback::Incorrect
                };
                let mut new = (*self).clone();
                new.last_answer_id = new.last_answer_id.wrapping_add(1);
                new.pending = Some(PendingAnswer {
                    id: new.last_answer_id,
                    choice,
                    feedback,
                });
                Rc::new(new)
            }
            Resolve { answer_id } => {
                let Some(answer) = self.pending.filter(|p| p.id == answer_id) else {
                    return self;
                };
                let mut new = (*self).clone();
                new.pending = None;
                new.apply_answer(answer);
                Rc::new(new)
            }
            Tick { now_ms } => {
                if self.is_complete {
                    return self;
                }
                let mut new = (*self).clone();
                new.time_elapsed_ms = (now_ms - new.start_time_ms).max(0.0);
                Rc::new(new)
            }
            Reset { now_ms } => {
                let mut new = GameState::new(self.words.clone(), self.config, now_ms);
                // keep ids moving so a timeout from the previous round cannot resolve
                new.last_answer_id = self.last_answer_id;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Rc<GameState> {
        let words = WordList::bundled().unwrap();
        Rc::new(GameState::new(words, GameConfig::default(), 1_000.0))
    }

    fn answer(state: Rc<GameState>, choice: usize) -> Rc<GameState> {
        let state = state.reduce(GameAction::Select { choice });
        let id = state.pending.map(|p| p.id).unwrap_or(0);
        state.reduce(GameAction::Resolve { answer_id: id })
    }

    fn answer_correct(state: Rc<GameState>) -> Rc<GameState> {
        let idx = state.current_word().correct_index;
        answer(state, idx)
    }

    #[test]
    fn bundled_word_list_is_valid() {
        let words = WordList::bundled().unwrap();
        assert_eq!(words.len(), 8);
        assert!(words.0.iter().all(|w| w.choices.len() == 4));
        assert_eq!(words.0.get(1).map(|w| w.target.as_str()), Some("fish"));
    }

    #[test]
    fn word_list_rejects_bad_entries() {
        assert!(matches!(WordList::parse("[]"), Err(WordListError::Empty)));
        assert!(matches!(
            WordList::parse("not json"),
            Err(WordListError::Parse(_))
        ));
        let out_of_range =
            r#"[{"id":3,"target":"a","choices":["a","b"],"correct_index":2}]"#;
        assert!(matches!(
            WordList::parse(out_of_range),
            Err(WordListError::CorrectIndexOutOfRange { id: 3, index: 2, len: 2 })
        ));
        let mismatch = r#"[{"id":4,"target":"a","choices":["a","b"],"correct_index":1}]"#;
        assert!(matches!(
            WordList::parse(mismatch),
            Err(WordListError::TargetMismatch { id: 4, .. })
        ));
        let none = r#"[{"id":5,"target":"a","choices":[],"correct_index":0}]"#;
        let err = WordList::parse(none).unwrap_err();
        assert_eq!(err.to_string(), "word 5 has no choices");
    }

    #[test]
    fn correct_choice_scores_and_reveals() {
        let s = fresh();
        let s = answer_correct(s);
        assert_eq!(s.score, 10);
        assert_eq!(s.revealed_parts, 1);
        assert_eq!(s.correct_answers, 1);
        assert_eq!(s.attempts, 1);
        assert_eq!(s.current_word_index, 1);
        assert!(!s.is_answering());
    }

    #[test]
    fn wrong_choices_only_count_attempts() {
        let s = fresh();
        let correct = s.current_word().correct_index;
        for choice in (0..4).filter(|c| *c != correct) {
            let before = fresh();
            let after = answer(before, choice);
            assert_eq!(after.score, 0);
            assert_eq!(after.revealed_parts, 0);
            assert_eq!(after.attempts, 1);
            assert_eq!(after.current_word_index, 0);
        }
    }

    #[test]
    fn select_sets_feedback_without_applying_outcome() {
        let s = fresh().reduce(GameAction::Select { choice: 0 });
        assert!(s.is_answering());
        assert_eq!(s.feedback(), Some(Feedback::Correct));
        assert_eq!(s.selected_choice(), Some(0));
        assert_eq!(s.score, 0);
        assert_eq!(s.attempts, 0);
    }

    #[test]
    fn lockout_ignores_repeated_selection() {
        let s = fresh().reduce(GameAction::Select { choice: 1 });
        let pending = s.pending;
        let s = s.reduce(GameAction::Select { choice: 0 });
        let s = s.reduce(GameAction::Select { choice: 2 });
        assert_eq!(s.pending, pending);
        let id = pending.map(|p| p.id).unwrap();
        let s = s.reduce(GameAction::Resolve { answer_id: id });
        assert_eq!(s.attempts, 1);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn stale_resolve_is_ignored() {
        let s = fresh().reduce(GameAction::Select { choice: 0 });
        let id = s.pending.map(|p| p.id).unwrap();
        let s = s.reduce(GameAction::Resolve { answer_id: id + 7 });
        assert!(s.is_answering());
        let s = s.reduce(GameAction::Resolve { answer_id: id });
        assert_eq!(s.score, 10);
        let again = s.clone().reduce(GameAction::Resolve { answer_id: id });
        assert_eq!(again.score, 10);
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let s = fresh();
        let after = s.clone().reduce(GameAction::Select { choice: 9 });
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn accuracy_rounds_ratio() {
        let s = fresh();
        assert_eq!(s.accuracy(), 100);
        // wrong, wrong, right -> 1/3 = 33%
        let s = answer(s, 1);
        let s = answer(s, 2);
        let s = answer_correct(s);
        assert_eq!(s.attempts, 3);
        assert_eq!(s.accuracy(), 33);
        // wrong -> 1/4 = 25%, right -> 2/5 = 40%
        let s = answer(s, 0);
        assert_eq!(s.accuracy(), 25);
        let s = answer_correct(s);
        assert_eq!(s.accuracy(), 40);
        let mut two_thirds = (*fresh()).clone();
        two_thirds.attempts = 3;
        two_thirds.correct_answers = 2;
        assert_eq!(two_thirds.accuracy(), 67);
    }

    #[test]
    fn perfect_run_completes() {
        let mut s = fresh();
        for _ in 0..8 {
            s = answer_correct(s);
        }
        assert!(s.is_complete);
        assert_eq!(s.score, 80);
        assert_eq!(s.accuracy(), 100);
        assert_eq!(s.revealed_parts, 8);
        assert_eq!(s.current_word_index, 7);
        assert_eq!(reveal_percent(s.revealed_parts, s.total_parts()), 100.0);
    }

    #[test]
    fn completed_state_rejects_input() {
        let mut s = fresh();
        for _ in 0..8 {
            s = answer_correct(s);
        }
        let selected = s.clone().reduce(GameAction::Select { choice: 0 });
        assert!(Rc::ptr_eq(&s, &selected));
        let ticked = s.clone().reduce(GameAction::Tick { now_ms: 99_000.0 });
        assert!(Rc::ptr_eq(&s, &ticked));
    }

    #[test]
    fn revealed_parts_capped_by_total() {
        let words = WordList::bundled().unwrap();
        let cfg = GameConfig {
            total_parts: 3,
            ..Default::default()
        };
        let mut s = Rc::new(GameState::new(words, cfg, 0.0));
        for _ in 0..8 {
            s = answer_correct(s);
        }
        assert_eq!(s.revealed_parts, 3);
        assert!(s.is_complete);
    }

    #[test]
    fn reveal_percent_handles_edges() {
        assert_eq!(reveal_percent(0, 8), 0.0);
        assert_eq!(reveal_percent(2, 8), 25.0);
        assert_eq!(reveal_percent(9, 8), 100.0);
        assert_eq!(reveal_percent(0, 0), 100.0);
    }

    #[test]
    fn tick_tracks_elapsed_time() {
        let s = fresh().reduce(GameAction::Tick { now_ms: 66_500.0 });
        assert_eq!(s.time_elapsed_ms, 65_500.0);
        assert_eq!(s.formatted_time(), "1:05");
        let early = s.reduce(GameAction::Tick { now_ms: 0.0 });
        assert_eq!(early.time_elapsed_ms, 0.0);
    }

    #[test]
    fn reset_restores_initial_shape() {
        let mut s = fresh();
        s = answer(s, 3);
        s = answer_correct(s);
        s = s.reduce(GameAction::Tick { now_ms: 5_000.0 });
        s = s.reduce(GameAction::Select { choice: 0 });
        let stale_id = s.pending.map(|p| p.id).unwrap();
        let r = s.reduce(GameAction::Reset { now_ms: 9_000.0 });
        assert_eq!(r.score, 0);
        assert_eq!(r.attempts, 0);
        assert_eq!(r.correct_answers, 0);
        assert_eq!(r.revealed_parts, 0);
        assert_eq!(r.current_word_index, 0);
        assert!(!r.is_complete);
        assert!(!r.is_answering());
        assert_eq!(r.start_time_ms, 9_000.0);
        assert_eq!(r.time_elapsed_ms, 0.0);
        // an answer from the new round never shares an id with the old one
        let r = r.reduce(GameAction::Select { choice: 0 });
        assert_ne!(r.pending.map(|p| p.id), Some(stale_id));
        let r = r.reduce(GameAction::Resolve { answer_id: stale_id });
        assert!(r.is_answering());
    }
}
