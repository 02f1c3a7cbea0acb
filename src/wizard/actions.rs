//! Semantic click action IDs.
//!
//! `_BASE` constants are offset by a catalog or result index; each range is
//! wide enough for its table (the server returns at most a handful of
//! matches, capped well below the 20-slot card range).

pub const LANG_TOGGLE: u16 = 1;

pub const GOTO_STEP_BASE: u16 = 10; // + Step index

pub const TOGGLE_SKILL_BASE: u16 = 20; // + SKILLS index
pub const TOGGLE_INTEREST_BASE: u16 = 30; // + INTERESTS index
pub const DEGREE_BASE: u16 = 40; // + DEGREES index
pub const FIELD_BASE: u16 = 50; // + FIELDS index
pub const LOCATION_BASE: u16 = 60; // + LOCATIONS index

pub const TOGGLE_WFH: u16 = 70;
pub const SUBMIT: u16 = 71;

pub const OPEN_MATCH_BASE: u16 = 80; // + result card index

pub const MODAL_CLOSE: u16 = 100;
pub const MODAL_APPLY: u16 = 101;
pub const ROADMAP_TOGGLE_BASE: u16 = 110; // + missing-skill index
pub const TUTORIAL_LINK_BASE: u16 = 130; // + missing-skill index

pub const FEEDBACK_YES: u16 = 150;
pub const FEEDBACK_NO: u16 = 151;
