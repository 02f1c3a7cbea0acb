//! Static option catalogs for the questionnaire.
//!
//! Each entry pairs the identifier submitted to the server with the key used
//! to localize its label. Display order is fixed and doubles as the order in
//! which selected identifiers are listed in the submission payload.

/// One selectable option.
pub struct Choice {
    /// Stable identifier sent to the recommendation endpoint.
    pub id: &'static str,
    /// Localization key for the visible label.
    pub label_key: &'static str,
}

pub const DEGREES: [Choice; 6] = [
    Choice { id: "btech", label_key: "btech" },
    Choice { id: "ba", label_key: "ba" },
    Choice { id: "bcom", label_key: "bcom" },
    Choice { id: "bsc", label_key: "bsc" },
    Choice { id: "polytechnic", label_key: "polytechnic" },
    Choice { id: "other", label_key: "other" },
];

pub const FIELDS: [Choice; 5] = [
    Choice { id: "cs", label_key: "cs" },
    Choice { id: "mech", label_key: "mech" },
    Choice { id: "electronics", label_key: "electronics" },
    Choice { id: "commerce", label_key: "commerce" },
    Choice { id: "arts", label_key: "arts" },
];

pub const SKILLS: [Choice; 8] = [
    Choice { id: "skill_comm", label_key: "skill_comm" },
    Choice { id: "skill_team", label_key: "skill_team" },
    Choice { id: "skill_python", label_key: "skill_python" },
    Choice { id: "skill_java", label_key: "skill_java" },
    Choice { id: "skill_mktg", label_key: "skill_mktg" },
    Choice { id: "skill_sales", label_key: "skill_sales" },
    Choice { id: "skill_office", label_key: "skill_office" },
    Choice { id: "skill_data", label_key: "skill_data" },
];

pub const INTERESTS: [Choice; 4] = [
    Choice { id: "interest_it", label_key: "interest_it" },
    Choice { id: "interest_mktg", label_key: "interest_mktg" },
    Choice { id: "interest_engg", label_key: "interest_engg" },
    Choice { id: "interest_finance", label_key: "interest_finance" },
];

pub const LOCATIONS: [Choice; 6] = [
    Choice { id: "any", label_key: "loc_any" },
    Choice { id: "pune", label_key: "loc_pune" },
    Choice { id: "mumbai", label_key: "loc_mumbai" },
    Choice { id: "delhi", label_key: "loc_delhi" },
    Choice { id: "bangalore", label_key: "loc_bangalore" },
    Choice { id: "wfh", label_key: "loc_wfh" },
];
