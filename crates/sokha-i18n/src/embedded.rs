//! Embedded catalog text.
//!
//! English is complete for every key the section catalogs reference. Khmer
//! coverage is partial — untranslated keys fall back to English at resolve
//! time, matching what the translation service actually delivers per site.

use sokha_core::{Locale, QuestionnaireKind};

type Entries = &'static [(&'static str, &'static str)];

const CLIENT_QUESTIONS_EN: Entries = &[
    ("consent", "Do you agree to take part in this short survey about your visit today?"),
    ("q1a", "What is your sex?"),
    ("q2a", "How old are you?"),
    ("q3a", "Is this your first visit to this facility?"),
    ("q4c", "How long did it take you to travel here?"),
    ("q5c", "Which services did you use today?"),
    ("q6c", "How was the waiting time before you were seen?"),
    ("q7c", "How politely were you treated by the staff?"),
    ("q8c", "Was your privacy respected during the examination?"),
    ("q9c", "How clearly were your condition and treatment explained?"),
    ("q10c", "Were you able to ask the questions you wanted?"),
    ("q11c", "How clean was the facility?"),
    ("q12c", "Do you have any suggestions for this facility?"),
    ("q13c", "Did you pay any money for today's services?"),
    ("q14c", "How much did you pay, in riel?"),
    ("q15c", "Overall, how satisfied are you with your visit?"),
    ("thank", "Thank you for your time. Your answers help improve this facility."),
];

const CLIENT_ANSWERS_EN: Entries = &[
    ("yes", "Yes"),
    ("no", "No"),
    ("gender_male", "Male"),
    ("gender_female", "Female"),
    ("gender_other", "Other"),
    ("travel_under_30", "Less than 30 minutes"),
    ("travel_30_to_60", "30 minutes to 1 hour"),
    ("travel_over_60", "More than 1 hour"),
    ("service_consultation", "Consultation"),
    ("service_pharmacy", "Pharmacy"),
    ("service_laboratory", "Laboratory"),
    ("service_vaccination", "Vaccination"),
    ("rating_very_poor", "Very poor"),
    ("rating_poor", "Poor"),
    ("rating_good", "Good"),
    ("rating_very_good", "Very good"),
];

const CLIENT_QUESTIONS_KH: Entries = &[
    ("consent", "តើអ្នកយល់ព្រមចូលរួមក្នុងការស្ទង់មតិខ្លីអំពីការមកពិនិត្យរបស់អ្នកថ្ងៃនេះទេ?"),
    ("q1a", "តើអ្នកជាភេទអ្វី?"),
    ("q2a", "តើអ្នកអាយុប៉ុន្មាន?"),
    ("q3a", "តើនេះជាលើកទីមួយដែលអ្នកមកមន្ទីរពេទ្យនេះទេ?"),
    ("q13c", "តើអ្នកបានបង់ប្រាក់សម្រាប់សេវាកម្មថ្ងៃនេះទេ?"),
    ("q14c", "តើអ្នកបានបង់ប៉ុន្មានរៀល?"),
    ("thank", "អរគុណសម្រាប់ពេលវេលារបស់អ្នក។"),
];

const CLIENT_ANSWERS_KH: Entries = &[
    ("yes", "បាទ/ចាស"),
    ("no", "ទេ"),
    ("gender_male", "ប្រុស"),
    ("gender_female", "ស្រី"),
    ("gender_other", "ផ្សេងៗ"),
    ("rating_very_poor", "មិនល្អទាល់តែសោះ"),
    ("rating_poor", "មិនល្អ"),
    ("rating_good", "ល្អ"),
    ("rating_very_good", "ល្អណាស់"),
];

const PROVIDER_QUESTIONS_EN: Entries = &[
    ("consent", "Do you agree to take part in this staff satisfaction survey?"),
    ("p1", "What is your role at this facility?"),
    ("p2", "How many years have you worked here?"),
    ("p3", "How manageable is your current workload?"),
    ("p4", "Which trainings have you attended in the past year?"),
    ("p5", "Have you received a supervision visit this quarter?"),
    ("p6", "How many supervision visits did you receive this quarter?"),
    ("p7", "Overall, how satisfied are you with working here?"),
    ("p8", "Do you have any suggestions for management?"),
    ("thank", "Thank you. Your feedback goes directly to the provincial health department."),
];

const PROVIDER_ANSWERS_EN: Entries = &[
    ("yes", "Yes"),
    ("no", "No"),
    ("role_doctor", "Doctor"),
    ("role_nurse", "Nurse"),
    ("role_midwife", "Midwife"),
    ("role_other", "Other"),
    ("training_clinical", "Clinical care"),
    ("training_hygiene", "Hygiene and sanitation"),
    ("training_management", "Facility management"),
    ("rating_very_poor", "Very poor"),
    ("rating_poor", "Poor"),
    ("rating_good", "Good"),
    ("rating_very_good", "Very good"),
];

const PROVIDER_QUESTIONS_KH: Entries = &[
    ("consent", "តើអ្នកយល់ព្រមចូលរួមក្នុងការស្ទង់មតិបុគ្គលិកនេះទេ?"),
    ("thank", "អរគុណ។"),
];

const PROVIDER_ANSWERS_KH: Entries = &[("yes", "បាទ/ចាស"), ("no", "ទេ")];

pub(crate) const TABLES: &[(Locale, QuestionnaireKind, Entries, Entries)] = &[
    (
        Locale::En,
        QuestionnaireKind::Client,
        CLIENT_QUESTIONS_EN,
        CLIENT_ANSWERS_EN,
    ),
    (
        Locale::Kh,
        QuestionnaireKind::Client,
        CLIENT_QUESTIONS_KH,
        CLIENT_ANSWERS_KH,
    ),
    (
        Locale::En,
        QuestionnaireKind::Provider,
        PROVIDER_QUESTIONS_EN,
        PROVIDER_ANSWERS_EN,
    ),
    (
        Locale::Kh,
        QuestionnaireKind::Provider,
        PROVIDER_QUESTIONS_KH,
        PROVIDER_ANSWERS_KH,
    ),
];
