use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Looks `key` up in the string table. Missing keys come back unchanged.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    STRINGS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, hi)| match language {
            Language::En => *en,
            Language::Hi => *hi,
        })
        .unwrap_or(key)
}

// (key, en, hi)
const STRINGS: &[(&str, &str, &str)] = &[
    ("home.title", "Theme Preference Survey", "थीम वरीयता सर्वेक्षण"),
    (
        "home.subtitle",
        "Please help us find the best theme for our IFMIS NEXT GEN application.",
        "कृपया हमारे IFMIS NEXT GEN एप्लिकेशन के लिए सर्वोत्तम थीम खोजने में हमारी मदद करें।",
    ),
    ("home.step1.title", "Review Three Themes", "तीन थीम देखें"),
    ("home.step2.title", "Mark Each as Viewed", "प्रत्येक को देखा हुआ चिह्नित करें"),
    ("home.step3.title", "Submit Your Feedback", "अपनी प्रतिक्रिया दें"),
    ("home.startReview", "Start Review", "समीक्षा शुरू करें"),
    ("home.duration", "Takes approximately 2 minutes", "लगभग 2 मिनट लगते हैं"),
    ("review.title", "Review Themes", "थीम समीक्षा"),
    ("review.proceedFeedback", "Proceed to Feedback", "फीडबैक दें"),
    ("review.viewAll", "Please view all themes to continue", "कृपया जारी रखने के लिए सभी थीम देखें"),
    ("progress.title", "Review Progress", "समीक्षा प्रगति"),
    ("progress.green", "Green", "हरा"),
    ("progress.purple", "Purple", "बैंगनी"),
    ("progress.blue", "Blue", "नीला"),
    (
        "progress.complete",
        "All themes reviewed! You can now proceed to feedback.",
        "सभी थीम समीक्षित! अब आप फीडबैक दे सकते हैं।",
    ),
    (
        "progress.remaining",
        "Please review all remaining themes to unlock the feedback form.",
        "कृपया फीडबैक फॉर्म अनलॉक करने के लिए शेष थीम देखें।",
    ),
    ("pdf.viewed", "Viewed", "देखा गया"),
    ("pdf.markViewed", "Mark as Viewed", "देखा हुआ चिह्नित करें"),
    ("feedback.title", "Submit Your Feedback", "अपनी प्रतिक्रिया दें"),
    ("feedback.allReviewed", "All Themes Reviewed", "सभी थीम समीक्षित"),
    ("feedback.canSubmit", "You can now submit your feedback", "अब आप अपनी प्रतिक्रिया दे सकते हैं"),
    ("feedback.locked", "Feedback Locked", "फीडबैक लॉक है"),
    (
        "feedback.lockDesc",
        "Please review all themes before submitting feedback.",
        "कृपया फीडबैक देने से पहले सभी थीम देखें।",
    ),
    ("feedback.remaining", "Remaining themes:", "शेष थीम:"),
    ("feedback.alreadySubmitted", "Already Submitted", "पहले से सबमिट किया गया"),
    (
        "feedback.alreadyDesc",
        "You have already submitted your feedback in this session.",
        "आपने इस सत्र में पहले ही अपनी प्रतिक्रिया दे दी है।",
    ),
    ("form.errorSession", "You have already submitted feedback in this session.", "आपने इस सत्र में पहले ही प्रतिक्रिया दे दी है।"),
    (
        "form.errorFailed",
        "Failed to submit feedback. Please try again.",
        "प्रतिक्रिया सबमिट करने में विफल। कृपया पुनः प्रयास करें।",
    ),
    ("form.errorIncomplete", "Name, department and a preferred theme are required.", "नाम, विभाग और पसंदीदा थीम आवश्यक हैं।"),
    ("thankyou.title", "Thank You!", "धन्यवाद!"),
    (
        "thankyou.message",
        "Your feedback has been submitted successfully.",
        "आपकी प्रतिक्रिया सफलतापूर्वक सबमिट हो गई है।",
    ),
    (
        "thankyou.note",
        "Your response helps shape our product design.",
        "आपकी प्रतिक्रिया हमारे उत्पाद डिज़ाइन को आकार देने में मदद करती है।",
    ),
    ("lang.select", "Select Language / भाषा चुनें", "Select Language / भाषा चुनें"),
    ("lang.english", "English", "English"),
    ("lang.hindi", "हिंदी", "हिंदी"),
];
