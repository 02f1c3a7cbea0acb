//! Wizard view state: the single value the renderer projects.
//!
//! Exactly one step is active because the active step *is* one enum value;
//! there is no per-element flag to get out of sync. The request lifecycle is
//! an explicit phase, so "a request is in flight" is a state the reducer can
//! refuse to re-enter rather than a UI accident.

use crate::api::{MatchResult, SubmissionPayload};
use crate::catalog::{INTERESTS, SKILLS};
use crate::locale::Lang;

/// The questionnaire steps, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Education,
    Skills,
    Interests,
    Location,
}

pub const STEPS: [Step; 5] = [
    Step::Welcome,
    Step::Education,
    Step::Skills,
    Step::Interests,
    Step::Location,
];

impl Step {
    pub fn index(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Education => 1,
            Step::Skills => 2,
            Step::Interests => 3,
            Step::Location => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        STEPS.get(index).copied()
    }

    /// The step the Next/Start control advances to.
    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    /// The step the Back control retreats to.
    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }
}

/// Progress through the interior steps, 0–100.
///
/// The welcome step is not counted, so it and the first interior step both
/// read 0%; the last step reads 100%. Monotone in the step index.
pub fn progress_percent(step: Step) -> u16 {
    let interior = STEPS.len() - 2;
    let pos = step.index().saturating_sub(1);
    ((pos * 100 + interior / 2) / interior).min(100) as u16
}

/// Where the page is in the submit lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Collecting answers.
    Form,
    /// Request in flight; the form is hidden and submits are ignored.
    Loading,
    /// Response (or failure) rendered in the results area.
    Results(RequestOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Parsed match objects; empty means "no matches", not an error.
    Matches(Vec<MatchResult>),
    /// Transport failure, non-2xx status, or malformed body.
    Failed,
}

/// The detail overlay, open over one match already in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub match_index: usize,
    /// Per-missing-skill roadmap accordion, collapsed by default.
    pub roadmap_open: Vec<bool>,
}

pub struct WizardState {
    pub lang: Lang,
    pub step: Step,

    pub skill_selected: [bool; SKILLS.len()],
    pub interest_selected: [bool; INTERESTS.len()],
    pub degree: usize,
    pub field: usize,
    pub location: usize,
    pub wfh_only: bool,

    pub phase: Phase,
    pub modal: Option<ModalState>,
    pub feedback_given: bool,

    /// Ticks elapsed while loading; drives the spinner frame.
    pub spinner_ticks: u64,

    /// Effect mailbox: the main loop drains this and spawns the request.
    pub pending_submit: Option<SubmissionPayload>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            lang: Lang::En,
            step: Step::Welcome,
            skill_selected: [false; SKILLS.len()],
            interest_selected: [false; INTERESTS.len()],
            degree: 0,
            field: 0,
            location: 0,
            wfh_only: false,
            phase: Phase::Form,
            modal: None,
            feedback_given: false,
            spinner_ticks: 0,
            pending_submit: None,
        }
    }

    /// The rendered match list, when the last request succeeded.
    pub fn matches(&self) -> Option<&[MatchResult]> {
        match &self.phase {
            Phase::Results(RequestOutcome::Matches(m)) => Some(m),
            _ => None,
        }
    }

    pub fn take_pending_submit(&mut self) -> Option<SubmissionPayload> {
        self.pending_submit.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = WizardState::new();
        assert_eq!(s.lang, Lang::En);
        assert_eq!(s.step, Step::Welcome);
        assert_eq!(s.phase, Phase::Form);
        assert!(s.skill_selected.iter().all(|&sel| !sel));
        assert!(s.interest_selected.iter().all(|&sel| !sel));
        assert_eq!((s.degree, s.field, s.location), (0, 0, 0));
        assert!(!s.wfh_only);
        assert!(s.modal.is_none());
        assert!(s.pending_submit.is_none());
    }

    #[test]
    fn step_order_roundtrips_through_index() {
        for (i, &step) in STEPS.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(Step::from_index(i), Some(step));
        }
        assert_eq!(Step::from_index(STEPS.len()), None);
    }

    #[test]
    fn next_and_prev_walk_the_sequence() {
        assert_eq!(Step::Welcome.next(), Some(Step::Education));
        assert_eq!(Step::Location.next(), None);
        assert_eq!(Step::Welcome.prev(), None);
        assert_eq!(Step::Skills.prev(), Some(Step::Education));
    }

    #[test]
    fn progress_values_match_the_page() {
        assert_eq!(progress_percent(Step::Welcome), 0);
        assert_eq!(progress_percent(Step::Education), 0);
        assert_eq!(progress_percent(Step::Skills), 33);
        assert_eq!(progress_percent(Step::Interests), 67);
        assert_eq!(progress_percent(Step::Location), 100);
    }

    #[test]
    fn progress_monotone_in_step_index() {
        let mut last = 0;
        for &step in &STEPS {
            let p = progress_percent(step);
            assert!(p >= last, "progress dropped at {step:?}");
            assert!(p <= 100);
            last = p;
        }
    }

    #[test]
    fn matches_accessor_only_on_success() {
        let mut s = WizardState::new();
        assert!(s.matches().is_none());
        s.phase = Phase::Loading;
        assert!(s.matches().is_none());
        s.phase = Phase::Results(RequestOutcome::Failed);
        assert!(s.matches().is_none());
        s.phase = Phase::Results(RequestOutcome::Matches(vec![]));
        assert_eq!(s.matches().map(|m| m.len()), Some(0));
    }

    #[test]
    fn pending_submit_drains_once() {
        let mut s = WizardState::new();
        s.pending_submit = Some(crate::api::SubmissionPayload {
            skills: vec![],
            interests: vec![],
            degree: "btech".into(),
            field: "cs".into(),
            location: "any".into(),
            wfh_only: false,
        });
        assert!(s.take_pending_submit().is_some());
        assert!(s.take_pending_submit().is_none());
    }
}
