//! Pure wizard logic: no rendering, no I/O.
//!
//! Every function maps the current state plus one event to the next state.
//! Side effects (the HTTP request, opening links) live outside; submit only
//! parks a payload in the mailbox for the main loop to drain.

use crate::api::{MatchResult, SubmissionPayload};
use crate::catalog::{DEGREES, FIELDS, INTERESTS, LOCATIONS, SKILLS};
use super::state::{ModalState, Phase, RequestOutcome, Step, WizardState};

// ── Language ──────────────────────────────────────────────────────────

pub fn toggle_lang(state: &mut WizardState) {
    state.lang = state.lang.toggled();
}

// ── Step navigation ───────────────────────────────────────────────────

/// Jump to any step. Navigation controls carry explicit targets, so there
/// is no adjacency check; the form keeps its answers across jumps.
pub fn goto_step(state: &mut WizardState, step: Step) {
    if state.phase == Phase::Form {
        state.step = step;
    }
}

// ── Selection accumulation ────────────────────────────────────────────

pub fn toggle_skill(state: &mut WizardState, index: usize) {
    if let Some(slot) = state.skill_selected.get_mut(index) {
        *slot = !*slot;
    }
}

pub fn toggle_interest(state: &mut WizardState, index: usize) {
    if let Some(slot) = state.interest_selected.get_mut(index) {
        *slot = !*slot;
    }
}

pub fn select_degree(state: &mut WizardState, index: usize) {
    if index < DEGREES.len() {
        state.degree = index;
    }
}

pub fn select_field(state: &mut WizardState, index: usize) {
    if index < FIELDS.len() {
        state.field = index;
    }
}

pub fn select_location(state: &mut WizardState, index: usize) {
    if index < LOCATIONS.len() {
        state.location = index;
    }
}

pub fn toggle_wfh(state: &mut WizardState) {
    state.wfh_only = !state.wfh_only;
}

// ── Submission ────────────────────────────────────────────────────────

/// Bundle the current selections, selected identifiers in catalog order.
pub fn build_payload(state: &WizardState) -> SubmissionPayload {
    let selected_ids = |flags: &[bool], table: &[crate::catalog::Choice]| {
        flags
            .iter()
            .zip(table)
            .filter(|(&on, _)| on)
            .map(|(_, c)| c.id.to_string())
            .collect()
    };
    SubmissionPayload {
        skills: selected_ids(&state.skill_selected, &SKILLS),
        interests: selected_ids(&state.interest_selected, &INTERESTS),
        degree: DEGREES[state.degree].id.to_string(),
        field: FIELDS[state.field].id.to_string(),
        location: LOCATIONS[state.location].id.to_string(),
        wfh_only: state.wfh_only,
    }
}

/// Hide the form, show the loader, and park the payload for the main loop.
/// A submit while a request is already in flight (or after results are
/// shown) is ignored — one outstanding request, ever.
pub fn submit(state: &mut WizardState) {
    if state.phase != Phase::Form {
        return;
    }
    state.pending_submit = Some(build_payload(state));
    state.phase = Phase::Loading;
    state.spinner_ticks = 0;
}

/// A well-formed response arrived; an empty list is a valid zero-match case.
pub fn apply_matches(state: &mut WizardState, matches: Vec<MatchResult>) {
    if state.phase != Phase::Loading {
        return;
    }
    state.phase = Phase::Results(RequestOutcome::Matches(matches));
    state.modal = None;
    state.feedback_given = false;
}

/// Transport failure, non-2xx, or malformed body. One generic message, no
/// retry, no partial results.
pub fn apply_failure(state: &mut WizardState) {
    if state.phase != Phase::Loading {
        return;
    }
    state.phase = Phase::Results(RequestOutcome::Failed);
    state.modal = None;
}

// ── Detail overlay ────────────────────────────────────────────────────

/// Open the overlay for one rendered card, from the match already in
/// memory. Out-of-range indices are ignored.
pub fn open_match(state: &mut WizardState, index: usize) {
    let missing = match state.matches().and_then(|m| m.get(index)) {
        Some(m) => m.missing_skills.len(),
        None => return,
    };
    state.modal = Some(ModalState {
        match_index: index,
        roadmap_open: vec![false; missing],
    });
}

pub fn close_modal(state: &mut WizardState) {
    state.modal = None;
}

pub fn toggle_roadmap(state: &mut WizardState, index: usize) {
    if let Some(modal) = &mut state.modal {
        if let Some(open) = modal.roadmap_open.get_mut(index) {
            *open = !*open;
        }
    }
}

// ── Feedback ──────────────────────────────────────────────────────────

/// Either answer collapses the feedback row into the thank-you line.
pub fn give_feedback(state: &mut WizardState) {
    if matches!(state.phase, Phase::Results(_)) {
        state.feedback_given = true;
    }
}

// ── Tick ──────────────────────────────────────────────────────────────

/// Advance the spinner while a request is outstanding; a no-op otherwise.
pub fn tick(state: &mut WizardState, delta_ticks: u32) {
    if state.phase == Phase::Loading {
        state.spinner_ticks += delta_ticks as u64;
    }
}
