//! Internship wizard — questionnaire, submission, and results UI.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use actions::*;
use state::{Phase, Step, WizardState};

pub struct WizardApp {
    pub state: WizardState,
}

impl WizardApp {
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    /// Handle one input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Char(c) => self.handle_char(*c),
            InputEvent::Enter => self.handle_enter(),
            InputEvent::Escape => self.handle_escape(),
        }
    }

    /// Advance the spinner animation.
    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn handle_click(&mut self, id: u16) -> bool {
        let s = &mut self.state;
        match id {
            LANG_TOGGLE => {
                logic::toggle_lang(s);
                true
            }
            id if (GOTO_STEP_BASE..GOTO_STEP_BASE + state::STEPS.len() as u16).contains(&id) => {
                if let Some(step) = Step::from_index((id - GOTO_STEP_BASE) as usize) {
                    logic::goto_step(s, step);
                }
                true
            }
            id if (TOGGLE_SKILL_BASE..TOGGLE_SKILL_BASE + 10).contains(&id) => {
                logic::toggle_skill(s, (id - TOGGLE_SKILL_BASE) as usize);
                true
            }
            id if (TOGGLE_INTEREST_BASE..TOGGLE_INTEREST_BASE + 10).contains(&id) => {
                logic::toggle_interest(s, (id - TOGGLE_INTEREST_BASE) as usize);
                true
            }
            id if (DEGREE_BASE..DEGREE_BASE + 10).contains(&id) => {
                logic::select_degree(s, (id - DEGREE_BASE) as usize);
                true
            }
            id if (FIELD_BASE..FIELD_BASE + 10).contains(&id) => {
                logic::select_field(s, (id - FIELD_BASE) as usize);
                true
            }
            id if (LOCATION_BASE..LOCATION_BASE + 10).contains(&id) => {
                logic::select_location(s, (id - LOCATION_BASE) as usize);
                true
            }
            TOGGLE_WFH => {
                logic::toggle_wfh(s);
                true
            }
            SUBMIT => {
                logic::submit(s);
                true
            }
            id if (OPEN_MATCH_BASE..MODAL_CLOSE).contains(&id) => {
                logic::open_match(s, (id - OPEN_MATCH_BASE) as usize);
                true
            }
            MODAL_CLOSE => {
                logic::close_modal(s);
                true
            }
            MODAL_APPLY => {
                if let Some(url) = self.current_modal_field(|m| m.apply_link.clone()) {
                    open_link(&url);
                }
                true
            }
            id if (ROADMAP_TOGGLE_BASE..TUTORIAL_LINK_BASE).contains(&id) => {
                logic::toggle_roadmap(s, (id - ROADMAP_TOGGLE_BASE) as usize);
                true
            }
            id if (TUTORIAL_LINK_BASE..FEEDBACK_YES).contains(&id) => {
                let idx = (id - TUTORIAL_LINK_BASE) as usize;
                if let Some(url) =
                    self.current_modal_field(|m| {
                        m.missing_skills.get(idx).map(|g| g.youtube_link.clone())
                    })
                    .flatten()
                {
                    open_link(&url);
                }
                true
            }
            FEEDBACK_YES | FEEDBACK_NO => {
                logic::give_feedback(s);
                true
            }
            _ => false,
        }
    }

    fn handle_char(&mut self, key: char) -> bool {
        let s = &mut self.state;

        // Language toggle works everywhere
        if key == 'l' {
            logic::toggle_lang(s);
            return true;
        }

        // Overlay captures digits for the roadmap accordions
        if s.modal.is_some() {
            return match key {
                '1'..='9' => {
                    logic::toggle_roadmap(s, key as usize - '1' as usize);
                    true
                }
                'o' => {
                    if let Some(url) = self.current_modal_field(|m| m.apply_link.clone()) {
                        open_link(&url);
                    }
                    true
                }
                _ => false,
            };
        }

        match &s.phase {
            Phase::Form => match s.step {
                Step::Welcome => false,
                Step::Education => match key {
                    '1'..='6' => {
                        logic::select_degree(s, key as usize - '1' as usize);
                        true
                    }
                    'a'..='e' => {
                        logic::select_field(s, key as usize - 'a' as usize);
                        true
                    }
                    'w' => {
                        logic::toggle_wfh(s);
                        true
                    }
                    _ => false,
                },
                Step::Skills => match key {
                    '1'..='8' => {
                        logic::toggle_skill(s, key as usize - '1' as usize);
                        true
                    }
                    _ => false,
                },
                Step::Interests => match key {
                    '1'..='4' => {
                        logic::toggle_interest(s, key as usize - '1' as usize);
                        true
                    }
                    _ => false,
                },
                Step::Location => match key {
                    '1'..='6' => {
                        logic::select_location(s, key as usize - '1' as usize);
                        true
                    }
                    _ => false,
                },
            },
            Phase::Loading => false,
            Phase::Results(_) => match key {
                '1'..='9' => {
                    logic::open_match(s, key as usize - '1' as usize);
                    true
                }
                _ => false,
            },
        }
    }

    /// Enter advances through the steps and finally submits.
    fn handle_enter(&mut self) -> bool {
        let s = &mut self.state;
        if s.modal.is_some() || s.phase != Phase::Form {
            return false;
        }
        match s.step {
            Step::Location => logic::submit(s),
            step => {
                if let Some(next) = step.next() {
                    logic::goto_step(s, next);
                }
            }
        }
        true
    }

    /// Escape closes the overlay, otherwise retreats one step.
    fn handle_escape(&mut self) -> bool {
        let s = &mut self.state;
        if s.modal.is_some() {
            logic::close_modal(s);
            return true;
        }
        if s.phase == Phase::Form {
            if let Some(prev) = s.step.prev() {
                logic::goto_step(s, prev);
                return true;
            }
        }
        false
    }

    fn current_modal_field<T>(&self, pick: impl Fn(&crate::api::MatchResult) -> T) -> Option<T> {
        let modal = self.state.modal.as_ref()?;
        let m = self.state.matches()?.get(modal.match_index)?;
        Some(pick(m))
    }
}

/// Open a URL in a new browser tab. A no-op off-wasm so the reducer tests
/// can drive apply/tutorial clicks without a browser.
fn open_link(url: &str) {
    #[cfg(target_arch = "wasm32")]
    crate::api::open_in_new_tab(url);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}
