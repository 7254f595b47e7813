//! Localization dictionary.
//!
//! Lookup falls through three levels: the active locale, then English,
//! then the key itself, so a missing translation degrades to readable text
//! instead of a blank widget.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Te,
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Te, Locale::Hi];

    /// Parse a stored/selected language tag; unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "te" => Locale::Te,
            "hi" => Locale::Hi,
            _ => Locale::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Te => "te",
            Locale::Hi => "hi",
        }
    }

    /// Native-script name shown in the language picker.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Te => "తెలుగు",
            Locale::Hi => "हिन्दी",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

type Table = HashMap<&'static str, &'static str>;

static EN: Lazy<Table> = Lazy::new(|| {
    [
        ("appName", "CropSight"),
        ("navHome", "Home"),
        ("navDetect", "Detect Disease"),
        ("navSchemes", "Govt Schemes"),
        ("heroTitle", "🌾 Welcome to CropSight"),
        ("heroSubtitle", "AI Powered Plant & Seed Disease Detection"),
        (
            "heroDescription",
            "Identify plant diseases instantly, access government schemes, and get expert advice—all in one place.",
        ),
        ("detectTitle", "🔍 Disease Detection"),
        (
            "detectSubtitle",
            "Upload an image to detect plant diseases or seed defects",
        ),
        ("uploadLabel", "Select Image:"),
        ("uploadText", "Click or drag to upload image"),
        ("uploadHint", "Supported: PNG, JPG, JPEG (Max 5MB)"),
        ("btnAnalyze", "Analyze Image"),
        ("loading", "Processing..."),
        ("resultTitle", "🔬 Detection Results"),
        ("confidence", "Confidence"),
        ("treatmentTitle", "💊 Recommended Treatment"),
        ("preventionTitle", "🛡️ Prevention Tips"),
        ("btnAnalyzeAnother", "Analyze Another Image"),
        ("chatTitle", "Agriculture Assistant"),
        ("chatSubtitle", "Ask about farming, crops, or schemes"),
        ("chatPlaceholder", "Ask about crops, diseases, schemes..."),
        (
            "chatGreeting",
            "Hello! I'm your agriculture assistant. How can I help you today?",
        ),
        (
            "footerTagline",
            "Empowering farmers with technology for a better tomorrow.",
        ),
    ]
    .into_iter()
    .collect()
});

static TE: Lazy<Table> = Lazy::new(|| {
    [
        ("appName", "క్రాప్‌సైట్"),
        ("navHome", "హోమ్"),
        ("navDetect", "వ్యాధి గుర్తింపు"),
        ("navSchemes", "పథకాలు"),
        ("heroTitle", "🌾 క్రాప్‌సైట్‌కు స్వాగతం"),
        ("heroSubtitle", "AI ఆధారిత మొక్క & విత్తన వ్యాధి గుర్తింపు"),
        ("detectTitle", "🔍 వ్యాధి గుర్తింపు"),
        ("detectSubtitle", "వ్యాధులను గుర్తించడానికి ఫోటో అప్‌లోడ్ చేయండి"),
        ("uploadLabel", "చిత్రాన్ని ఎంచుకోండి:"),
        ("uploadText", "ఇక్కడ క్లిక్ చేయండి"),
        ("uploadHint", "మద్దతు: PNG, JPG (గరిష్టం 5MB)"),
        ("btnAnalyze", "విశ్లేషించండి"),
        ("resultTitle", "🔬 ఫలితాలు"),
        ("confidence", "నమ్మకం"),
        ("treatmentTitle", "💊 చికిత్స"),
        ("preventionTitle", "🛡️ నివారణ చర్యలు"),
        ("btnAnalyzeAnother", "మరొకటి విశ్లేషించండి"),
    ]
    .into_iter()
    .collect()
});

static HI: Lazy<Table> = Lazy::new(|| {
    [
        ("appName", "क्रॉपसाइट"),
        ("navHome", "होम"),
        ("navDetect", "रोग पहचान"),
        ("navSchemes", "योजनाएं"),
        ("heroTitle", "🌾 क्रॉपसाइट में स्वागत है"),
        ("heroSubtitle", "AI संचालित रोग पहचान"),
        ("detectTitle", "🔍 रोग पहचान"),
        ("detectSubtitle", "रोग का पता लगाने के लिए फोटो अपलोड करें"),
        ("uploadLabel", "तस्वीर चुनें:"),
        ("uploadText", "यहाँ क्लिक करें"),
        ("uploadHint", "समर्थित: PNG, JPG (अधिकतम 5MB)"),
        ("btnAnalyze", "विश्लेषण करें"),
        ("resultTitle", "🔬 परिणाम"),
        ("confidence", "आत्मविश्वास"),
        ("treatmentTitle", "💊 उपचार"),
        ("preventionTitle", "🛡️ रोकथाम"),
        ("btnAnalyzeAnother", "दूसरा विश्लेषण करें"),
    ]
    .into_iter()
    .collect()
});

fn table(locale: Locale) -> &'static Table {
    match locale {
        Locale::En => &EN,
        Locale::Te => &TE,
        Locale::Hi => &HI,
    }
}

/// Resolve `key` for `locale`: active locale, then English, then the key.
pub fn get<'a>(locale: Locale, key: &'a str) -> &'a str {
    if let Some(text) = table(locale).get(key).copied() {
        return text;
    }
    if locale != Locale::En {
        if let Some(text) = table(Locale::En).get(key).copied() {
            return text;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_locale_wins() {
        assert_eq!(get(Locale::Te, "navHome"), "హోమ్");
        assert_eq!(get(Locale::Hi, "navHome"), "होम");
        assert_eq!(get(Locale::En, "navHome"), "Home");
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        // Chat strings are only translated in English.
        assert_eq!(get(Locale::Te, "chatTitle"), "Agriculture Assistant");
        assert_eq!(get(Locale::Hi, "chatPlaceholder"), get(Locale::En, "chatPlaceholder"));
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(get(Locale::En, "noSuchKey"), "noSuchKey");
        assert_eq!(get(Locale::Te, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn unknown_tag_defaults_to_english() {
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag("te"), Locale::Te);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn tags_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), locale);
        }
    }
}
