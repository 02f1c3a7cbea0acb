//! Bilingual string table (EN/HI) with safe fallback.
//!
//! English is the base table; Hindi is an overlay holding the translated
//! subset. Lookup goes active language → base table → the key itself, so a
//! key missing from the overlay silently keeps its base-language text. A
//! handful of strings (error text, no-results, tutorial labels) were never
//! translated and exist only in the base table; they reach Hindi through the
//! fallback path on purpose.

/// Supported display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Hi,
}

impl Lang {
    /// The other supported language.
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Hi,
            Lang::Hi => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    /// Label for the language toggle control: it names the *other* language.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::En => "हिन्दी",
            Lang::Hi => "English",
        }
    }
}

/// Look up `key` in `lang`, falling back to the base table and finally to
/// the key itself. Never fails; a miss is a policy, not an error.
pub fn text(lang: Lang, key: &'static str) -> &'static str {
    let localized = match lang {
        Lang::En => base_en(key),
        Lang::Hi => hi_overlay(key),
    };
    localized.or_else(|| base_en(key)).unwrap_or(key)
}

fn base_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "main_title" => "Find Your Perfect Internship ✨",
        "main_subtitle" => "Answer a few questions to get 3-5 personalized recommendations.",
        "welcome_title" => "Welcome!",
        "welcome_subtitle" => "Let's get started. It only takes a minute.",
        "start_now_btn" => "Start Now",
        "edu_title" => "🎓 Your Education",
        "edu_q1" => "What is your highest qualification?",
        "edu_q2" => "What is your field of study?",
        "wfh_checkbox" => "Show me Work From Home internships only",
        "skills_title" => "💡 Your Skills",
        "skills_subtitle" => "Select a few skills you have (or want to learn).",
        "interests_title" => "🎯 Your Interests",
        "interests_subtitle" => "Which sectors are you interested in?",
        "location_title" => "📍 Location Preference",
        "location_q1" => "Where would you like to work?",
        "back_btn" => "Back",
        "next_btn" => "Next",
        "find_btn" => "Find Internships",
        "loader_text" => "Finding the best matches for you...",
        "results_title" => "🚀 Here are your top matches!",
        "next_title" => "🤔 What should I do next?",
        "next_step1" => "📄 **Prepare Your Resume:** Make sure your contact details are correct.",
        "next_step2" => "✉️ **Click \"View & Apply\":** This will open a simple summary. Review it and then proceed to the company's application page.",
        "next_step3" => "💡 **Be Confident:** Your skills and interests are a great match for these roles!",
        "feedback_title" => "Were these recommendations helpful?",
        "feedback_thanks" => "Thank you for your feedback!",
        "modal_role" => "Your Role:",
        "proceed_btn" => "Proceed to Apply",
        // Degree options
        "btech" => "B.Tech / B.E.",
        "ba" => "B.A.",
        "bcom" => "B.Com",
        "bsc" => "B.Sc",
        "polytechnic" => "Polytechnic / Diploma",
        "other" => "Other",
        // Field options
        "cs" => "Computer Science",
        "mech" => "Mechanical Engineering",
        "electronics" => "Electronics",
        "commerce" => "Commerce",
        "arts" => "Arts",
        // Skill tags
        "skill_comm" => "Communication",
        "skill_team" => "Teamwork",
        "skill_python" => "Python",
        "skill_java" => "Java",
        "skill_mktg" => "Marketing",
        "skill_sales" => "Sales",
        "skill_office" => "MS Office",
        "skill_data" => "Data Analysis",
        // Interest cards
        "interest_it" => "IT & Software",
        "interest_mktg" => "Marketing & Sales",
        "interest_engg" => "Core Engineering",
        "interest_finance" => "Finance",
        // Location options
        "loc_any" => "Any Location",
        "loc_pune" => "Pune",
        "loc_mumbai" => "Mumbai",
        "loc_delhi" => "Delhi",
        "loc_bangalore" => "Bangalore",
        "loc_wfh" => "Work From Home",
        // Base-only strings (untranslated on the original page as well)
        "error_text" => "An error occurred. Please try again later.",
        "no_results" => "No internships found matching your criteria.",
        "match_suffix" => "% Match",
        "skill_gap_title" => "Bridge Your Skill Gap",
        "watch_tutorial" => "Watch Tutorial 📺",
        "view_roadmap" => "View Learning Roadmap",
        _ => return None,
    })
}

fn hi_overlay(key: &str) -> Option<&'static str> {
    Some(match key {
        "main_title" => "अपनी परफेक्ट इंटर्नशिप ढूंढें ✨",
        "main_subtitle" => "3-5 वैयक्तिकृत सिफारिशें प्राप्त करने के लिए कुछ सवालों के जवाब दें।",
        "welcome_title" => "आपका स्वागत है!",
        "welcome_subtitle" => "चलिए शुरू करते हैं। इसमें केवल एक मिनट लगेगा।",
        "start_now_btn" => "अभी शुरू करें",
        "edu_title" => "🎓 आपकी शिक्षा",
        "edu_q1" => "आपकी उच्चतम योग्यता क्या है?",
        "edu_q2" => "आपके अध्ययन का क्षेत्र क्या है?",
        "wfh_checkbox" => "मुझे केवल घर से काम करने वाली इंटर्नशिप दिखाएं",
        "skills_title" => "💡 आपके कौशल",
        "skills_subtitle" => "आपके पास कुछ कौशल चुनें (या सीखना चाहते हैं)।",
        "interests_title" => "🎯 आपकी रुचियां",
        "interests_subtitle" => "आप किन क्षेत्रों में रुचि रखते हैं?",
        "location_title" => "📍 स्थान वरीयता",
        "location_q1" => "आप कहाँ काम करना चाहेंगे?",
        "back_btn" => "वापस",
        "next_btn" => "अगला",
        "find_btn" => "इंटर्नशिप खोजें",
        "loader_text" => "आपके लिए सबसे अच्छे मैच ढूंढ रहे हैं...",
        "results_title" => "🚀 यहाँ आपके शीर्ष मैच हैं!",
        "next_title" => "🤔 मुझे आगे क्या करना चाहिए?",
        "next_step1" => "📄 **अपना रिज्यूमे तैयार करें:** सुनिश्चित करें कि आपके संपर्क विवरण सही हैं।",
        "next_step2" => "✉️ **\"देखें और आवेदन करें\" पर क्लिक करें:** यह एक सरल सारांश खोलेगा। इसकी समीक्षा करें और फिर कंपनी के आवेदन पृष्ठ पर आगे बढ़ें।",
        "next_step3" => "💡 **आत्मविश्वासी बनें:** आपके कौशल और रुचियां इन भूमिकाओं के लिए एक बढ़िया मेल हैं!",
        "feedback_title" => "क्या ये सिफारिशें सहायक थीं?",
        "feedback_thanks" => "आपकी प्रतिक्रिया के लिए धन्यवाद!",
        "modal_role" => "आपकी भूमिका:",
        "proceed_btn" => "आवेदन करने के लिए आगे बढ़ें",
        // Degree options
        "btech" => "बी.टेक / बी.ई.",
        "ba" => "बी.ए.",
        "bcom" => "बी.कॉम",
        "bsc" => "बी.एससी",
        "polytechnic" => "पॉलिटेक्निक / डिप्लोमा",
        "other" => "अन्य",
        // Field options
        "cs" => "कंप्यूटर विज्ञान",
        "mech" => "मैकेनिकल इंजीनियरिंग",
        "electronics" => "इलेक्ट्रानिक्स",
        "commerce" => "व्यापार",
        "arts" => "कला",
        // Skill tags
        "skill_comm" => "संचार",
        "skill_team" => "टीम वर्क",
        "skill_python" => "पाइथन",
        "skill_java" => "जावा",
        "skill_mktg" => "विपणन",
        "skill_sales" => "बिक्री",
        "skill_office" => "एमएस ऑफिस",
        "skill_data" => "डेटा विश्लेषण",
        // Interest cards
        "interest_it" => "आईटी और सॉफ्टवेयर",
        "interest_mktg" => "विपणन और बिक्री",
        "interest_engg" => "कोर इंजीनियरिंग",
        "interest_finance" => "वित्त",
        // Location options
        "loc_any" => "कोई भी स्थान",
        "loc_pune" => "पुणे",
        "loc_mumbai" => "मुंबई",
        "loc_delhi" => "दिल्ली",
        "loc_bangalore" => "बैंगलोर",
        "loc_wfh" => "घर से काम",
        _ => return None,
    })
}
