//! Decision bookkeeping for manual mode.
//!
//! [`ReviewSession`] is a pure state machine over one file's spans; it never
//! touches the terminal or the file system. A [`ReviewInput`] feeds it events.

use crate::stripper::CommentSpan;
use std::collections::VecDeque;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Remove,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    Confirm,
    Skip,
    AcceptAllRemaining,
    Previous,
    Next,
    QuitAndSave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Reviewing(usize),
    Done,
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    decisions: Vec<Option<Decision>>,
    state: ReviewState,
}

impl ReviewSession {
    pub fn new(span_count: usize) -> Self {
        let state = if span_count == 0 {
            ReviewState::Done
        } else {
            ReviewState::Reviewing(0)
        };
        ReviewSession {
            decisions: vec![None; span_count],
            state,
        }
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// The decision recorded so far for span `index`, if any.
    pub fn decision(&self, index: usize) -> Option<Decision> {
        self.decisions.get(index).copied().flatten()
    }

    pub fn apply(&mut self, event: ReviewEvent) -> ReviewState {
        let ReviewState::Reviewing(index) = self.state else {
            return self.state;
        };
        let last = self.decisions.len() - 1;

        self.state = match event {
            ReviewEvent::Confirm => {
                self.decisions[index] = Some(Decision::Remove);
                self.advance_from(index)
            }
            ReviewEvent::Skip => {
                self.decisions[index] = Some(Decision::Keep);
                self.advance_from(index)
            }
            ReviewEvent::AcceptAllRemaining => {
                for decision in &mut self.decisions[index..] {
                    *decision = Some(Decision::Remove);
                }
                ReviewState::Done
            }
            ReviewEvent::Previous => ReviewState::Reviewing(index.saturating_sub(1)),
            ReviewEvent::Next => ReviewState::Reviewing((index + 1).min(last)),
            ReviewEvent::QuitAndSave => ReviewState::Done,
        };
        self.state
    }

    fn advance_from(&self, index: usize) -> ReviewState {
        if index + 1 == self.decisions.len() {
            ReviewState::Done
        } else {
            ReviewState::Reviewing(index + 1)
        }
    }

    /// Final decisions; anything never decided is kept.
    pub fn into_decisions(self) -> Vec<Decision> {
        self.decisions
            .into_iter()
            .map(|d| d.unwrap_or(Decision::Keep))
            .collect()
    }
}

/// What an input source is shown before it picks the next event.
#[derive(Debug, Clone, Copy)]
pub struct ReviewPrompt<'a> {
    pub path: &'a Path,
    pub content: &'a str,
    pub spans: &'a [CommentSpan],
    pub index: usize,
    pub current: Option<Decision>,
}

impl ReviewPrompt<'_> {
    pub fn span(&self) -> &CommentSpan {
        &self.spans[self.index]
    }
}

/// Source of review events. `Ok(None)` is unrecognised input and changes nothing.
pub trait ReviewInput {
    fn next_event(&mut self, prompt: &ReviewPrompt<'_>) -> io::Result<Option<ReviewEvent>>;
}

/// Replays a fixed event list, then quits and saves.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<Option<ReviewEvent>>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = ReviewEvent>) -> Self {
        ScriptedInput {
            events: events.into_iter().map(Some).collect(),
        }
    }

    /// Includes unrecognised inputs (`None`) in the script.
    pub fn with_raw(events: impl IntoIterator<Item = Option<ReviewEvent>>) -> Self {
        ScriptedInput {
            events: events.into_iter().collect(),
        }
    }
}

impl ReviewInput for ScriptedInput {
    fn next_event(&mut self, _prompt: &ReviewPrompt<'_>) -> io::Result<Option<ReviewEvent>> {
        Ok(self
            .events
            .pop_front()
            .unwrap_or(Some(ReviewEvent::QuitAndSave)))
    }
}

/// Runs a review of `spans` to completion and returns one decision per span.
pub fn run_review(
    path: &Path,
    content: &str,
    spans: &[CommentSpan],
    input: &mut dyn ReviewInput,
) -> io::Result<Vec<Decision>> {
    let mut session = ReviewSession::new(spans.len());
    while let ReviewState::Reviewing(index) = session.state() {
        let prompt = ReviewPrompt {
            path,
            content,
            spans,
            index,
            current: session.decision(index),
        };
        if let Some(event) = input.next_event(&prompt)? {
            tracing::trace!(index, ?event, "review event");
            session.apply(event);
        }
    }
    Ok(session.into_decisions())
}

#[cfg(test)]
mod tests {
    use super::ReviewEvent::*;
    use super::*;
    use proptest::prelude::*;

    fn replay(len: usize, events: &[ReviewEvent]) -> (ReviewSession, Vec<ReviewState>) {
        let mut session = ReviewSession::new(len);
        let states = events.iter().map(|&e| session.apply(e)).collect();
        (session, states)
    }

    #[test]
    fn empty_session_is_done() {
        let session = ReviewSession::new(0);
        assert_eq!(session.state(), ReviewState::Done);
        assert!(session.into_decisions().is_empty());
    }

    #[test]
    fn confirm_and_skip_advance() {
        let (session, states) = replay(3, &[Confirm, Skip, Confirm]);
        assert_eq!(
            states,
            vec![
                ReviewState::Reviewing(1),
                ReviewState::Reviewing(2),
                ReviewState::Done
            ]
        );
        assert_eq!(
            session.into_decisions(),
            vec![Decision::Remove, Decision::Keep, Decision::Remove]
        );
    }

    #[test]
    fn accept_all_marks_the_rest() {
        let (session, _) = replay(4, &[Skip, AcceptAllRemaining]);
        assert_eq!(session.state(), ReviewState::Done);
        assert_eq!(
            session.into_decisions(),
            vec![
                Decision::Keep,
                Decision::Remove,
                Decision::Remove,
                Decision::Remove
            ]
        );
    }

    #[test]
    fn navigation_is_clamped_and_keeps_decisions() {
        let (session, states) = replay(2, &[Previous, Confirm, Next, Next, Previous]);
        assert_eq!(
            states,
            vec![
                ReviewState::Reviewing(0),
                ReviewState::Reviewing(1),
                ReviewState::Reviewing(1),
                ReviewState::Reviewing(1),
                ReviewState::Reviewing(0),
            ]
        );
        assert_eq!(session.decision(0), Some(Decision::Remove));
        assert_eq!(session.decision(1), None);
    }

    #[test]
    fn revisiting_changes_a_decision() {
        let (session, _) = replay(3, &[Confirm, Previous, Skip, QuitAndSave]);
        assert_eq!(
            session.into_decisions(),
            vec![Decision::Keep, Decision::Keep, Decision::Keep]
        );
    }

    #[test]
    fn quit_keeps_unvisited_spans() {
        let (session, _) = replay(3, &[Confirm, QuitAndSave]);
        assert_eq!(
            session.into_decisions(),
            vec![Decision::Remove, Decision::Keep, Decision::Keep]
        );
    }

    #[test]
    fn events_after_done_are_ignored() {
        let (session, states) = replay(1, &[Confirm, Skip, Previous]);
        assert_eq!(states, vec![ReviewState::Done; 3]);
        assert_eq!(session.into_decisions(), vec![Decision::Remove]);
    }

    #[test]
    fn run_review_ignores_unknown_input() {
        let spans = vec![
            CommentSpan {
                start: 0,
                end: 3,
                line: 1,
                end_line: 1,
                kind: crate::stripper::CommentKind::Line,
                text: "# a".to_string(),
            };
            2
        ];
        let mut input = ScriptedInput::with_raw([None, Some(Confirm), None, Some(Skip)]);
        let decisions = run_review(Path::new("x.py"), "# a", &spans, &mut input).unwrap();
        assert_eq!(decisions, vec![Decision::Remove, Decision::Keep]);
    }

    fn event() -> impl Strategy<Value = ReviewEvent> {
        prop_oneof![
            Just(Confirm),
            Just(Skip),
            Just(AcceptAllRemaining),
            Just(Previous),
            Just(Next),
        ]
    }

    proptest! {
        #[test]
        fn quit_and_save_yields_one_decision_per_span(
            len in 1usize..12,
            events in proptest::collection::vec(event(), 0..40),
        ) {
            let mut session = ReviewSession::new(len);
            let mut chosen: Vec<Option<Decision>> = vec![None; len];
            for &e in &events {
                if let ReviewState::Reviewing(i) = session.state() {
                    match e {
                        Confirm => chosen[i] = Some(Decision::Remove),
                        Skip => chosen[i] = Some(Decision::Keep),
                        AcceptAllRemaining => {
                            for c in &mut chosen[i..] {
                                *c = Some(Decision::Remove);
                            }
                        }
                        _ => {}
                    }
                }
                session.apply(e);
            }
            session.apply(QuitAndSave);
            prop_assert_eq!(session.state(), ReviewState::Done);

            let decisions = session.into_decisions();
            prop_assert_eq!(decisions.len(), len);
            for (decision, chosen) in decisions.iter().zip(&chosen) {
                prop_assert_eq!(*decision, chosen.unwrap_or(Decision::Keep));
            }
        }
    }
}
