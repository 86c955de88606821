//! Localized user-facing strings shown around multilingual content.
//!
//! Display surfaces use these to label the translate affordance, signal that
//! the original text is standing in for a missing translation, and explain
//! translation failures. Placeholders are written as `{language}`.

use crate::error::TranslationError;
use crate::i18n::LanguageCode;

/// All localized strings for one UI language
#[derive(Debug, Clone, Copy)]
pub struct LanguageStrings {
    // ==================== Actions ====================
    /// Label of the per-language translate button
    pub translate_action: &'static str,

    /// Label of the "translate into every language" button in the editor
    pub translate_all_action: &'static str,

    // ==================== Content Badges ====================
    /// Shown under text that fell back to the original.
    /// Placeholders: {language} (native name of the original language)
    pub fallback_notice: &'static str,

    /// Badge shown next to machine-translated text
    pub auto_translated_badge: &'static str,

    // ==================== Errors ====================
    /// Provider unavailable or request rejected
    pub translation_failed: &'static str,

    /// Provider rate limit reached
    pub rate_limited: &'static str,

    /// Provider cannot translate into this language
    pub unsupported_language: &'static str,
}

impl LanguageStrings {
    /// Strings for the given UI language.
    pub fn for_language(language: LanguageCode) -> &'static LanguageStrings {
        match language.code() {
            "hi" => &HINDI_STRINGS,
            "bn" => &BENGALI_STRINGS,
            "te" => &TELUGU_STRINGS,
            "mr" => &MARATHI_STRINGS,
            "ta" => &TAMIL_STRINGS,
            "gu" => &GUJARATI_STRINGS,
            "kn" => &KANNADA_STRINGS,
            "ml" => &MALAYALAM_STRINGS,
            "pa" => &PUNJABI_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Fallback notice naming the language the original was written in.
    pub fn fallback_notice_for(&self, original_language: LanguageCode) -> String {
        self.fallback_notice
            .replace("{language}", original_language.native_name())
    }

    /// User-facing message for a translation failure.
    ///
    /// Returns `None` for [`TranslationError::Discarded`]: nobody is left to
    /// show it to.
    pub fn error_message(&self, error: &TranslationError) -> Option<&'static str> {
        match error {
            TranslationError::ProviderUnavailable(_)
            | TranslationError::Rejected(_)
            | TranslationError::EmptySourceText => Some(self.translation_failed),
            TranslationError::RateLimited { .. } => Some(self.rate_limited),
            TranslationError::UnsupportedLanguage(_) => Some(self.unsupported_language),
            TranslationError::Discarded => None,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "Translate",
    translate_all_action: "Translate into all languages",
    fallback_notice: "Showing the original ({language}). No translation yet.",
    auto_translated_badge: "Auto-translated",
    translation_failed: "Translation failed. Tap to retry.",
    rate_limited: "Too many translation requests. Please try again shortly.",
    unsupported_language: "Translation is not available for this language.",
};

// ==================== Hindi Strings ====================

pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "अनुवाद करें",
    translate_all_action: "सभी भाषाओं में अनुवाद करें",
    fallback_notice: "मूल पाठ ({language}) दिखाया जा रहा है। अभी अनुवाद उपलब्ध नहीं है।",
    auto_translated_badge: "स्वचालित अनुवाद",
    translation_failed: "अनुवाद विफल रहा। फिर से प्रयास करने के लिए टैप करें।",
    rate_limited: "बहुत अधिक अनुवाद अनुरोध। कृपया थोड़ी देर बाद प्रयास करें।",
    unsupported_language: "इस भाषा के लिए अनुवाद उपलब्ध नहीं है।",
};

// ==================== Bengali Strings ====================

pub const BENGALI_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "অনুবাদ করুন",
    translate_all_action: "সব ভাষায় অনুবাদ করুন",
    fallback_notice: "মূল লেখা ({language}) দেখানো হচ্ছে। এখনও অনুবাদ নেই।",
    auto_translated_badge: "স্বয়ংক্রিয় অনুবাদ",
    translation_failed: "অনুবাদ ব্যর্থ হয়েছে। আবার চেষ্টা করতে ট্যাপ করুন।",
    rate_limited: "অনেক বেশি অনুবাদ অনুরোধ। কিছুক্ষণ পরে আবার চেষ্টা করুন।",
    unsupported_language: "এই ভাষার জন্য অনুবাদ উপলব্ধ নয়।",
};

// ==================== Telugu Strings ====================

pub const TELUGU_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "అనువదించు",
    translate_all_action: "అన్ని భాషల్లోకి అనువదించు",
    fallback_notice: "అసలు పాఠం ({language}) చూపబడుతోంది. ఇంకా అనువాదం లేదు.",
    auto_translated_badge: "స్వయంచాలక అనువాదం",
    translation_failed: "అనువాదం విఫలమైంది. మళ్లీ ప్రయత్నించడానికి నొక్కండి.",
    rate_limited: "చాలా ఎక్కువ అనువాద అభ్యర్థనలు. కొద్దిసేపటి తర్వాత ప్రయత్నించండి.",
    unsupported_language: "ఈ భాషకు అనువాదం అందుబాటులో లేదు.",
};

// ==================== Marathi Strings ====================

pub const MARATHI_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "भाषांतर करा",
    translate_all_action: "सर्व भाषांमध्ये भाषांतर करा",
    fallback_notice: "मूळ मजकूर ({language}) दाखवत आहे. अद्याप भाषांतर नाही.",
    auto_translated_badge: "स्वयंचलित भाषांतर",
    translation_failed: "भाषांतर अयशस्वी झाले. पुन्हा प्रयत्न करण्यासाठी टॅप करा.",
    rate_limited: "खूप जास्त भाषांतर विनंत्या. कृपया थोड्या वेळाने पुन्हा प्रयत्न करा.",
    unsupported_language: "या भाषेसाठी भाषांतर उपलब्ध नाही.",
};

// ==================== Tamil Strings ====================

pub const TAMIL_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "மொழிபெயர்",
    translate_all_action: "எல்லா மொழிகளிலும் மொழிபெயர்",
    fallback_notice: "மூல உரை ({language}) காட்டப்படுகிறது. இன்னும் மொழிபெயர்ப்பு இல்லை.",
    auto_translated_badge: "தானியங்கி மொழிபெயர்ப்பு",
    translation_failed: "மொழிபெயர்ப்பு தோல்வியடைந்தது. மீண்டும் முயற்சிக்க தட்டவும்.",
    rate_limited: "அதிகமான மொழிபெயர்ப்பு கோரிக்கைகள். சிறிது நேரம் கழித்து முயற்சிக்கவும்.",
    unsupported_language: "இந்த மொழிக்கு மொழிபெயர்ப்பு கிடைக்கவில்லை.",
};

// ==================== Gujarati Strings ====================

pub const GUJARATI_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "અનુવાદ કરો",
    translate_all_action: "બધી ભાષાઓમાં અનુવાદ કરો",
    fallback_notice: "મૂળ લખાણ ({language}) બતાવવામાં આવે છે. હજી અનુવાદ નથી.",
    auto_translated_badge: "સ્વચાલિત અનુવાદ",
    translation_failed: "અનુવાદ નિષ્ફળ ગયો. ફરી પ્રયાસ કરવા ટેપ કરો.",
    rate_limited: "ઘણી બધી અનુવાદ વિનંતીઓ. થોડી વાર પછી પ્રયાસ કરો.",
    unsupported_language: "આ ભાષા માટે અનુવાદ ઉપલબ્ધ નથી.",
};

// ==================== Kannada Strings ====================

pub const KANNADA_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "ಅನುವಾದಿಸಿ",
    translate_all_action: "ಎಲ್ಲಾ ಭಾಷೆಗಳಿಗೆ ಅನುವಾದಿಸಿ",
    fallback_notice: "ಮೂಲ ಪಠ್ಯ ({language}) ತೋರಿಸಲಾಗುತ್ತಿದೆ. ಇನ್ನೂ ಅನುವಾದವಿಲ್ಲ.",
    auto_translated_badge: "ಸ್ವಯಂಚಾಲಿತ ಅನುವಾದ",
    translation_failed: "ಅನುವಾದ ವಿಫಲವಾಗಿದೆ. ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಲು ಟ್ಯಾಪ್ ಮಾಡಿ.",
    rate_limited: "ಹಲವಾರು ಅನುವಾದ ವಿನಂತಿಗಳು. ಸ್ವಲ್ಪ ಸಮಯದ ನಂತರ ಪ್ರಯತ್ನಿಸಿ.",
    unsupported_language: "ಈ ಭಾಷೆಗೆ ಅನುವಾದ ಲಭ್ಯವಿಲ್ಲ.",
};

// ==================== Malayalam Strings ====================

pub const MALAYALAM_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "വിവർത്തനം ചെയ്യുക",
    translate_all_action: "എല്ലാ ഭാഷകളിലേക്കും വിവർത്തനം ചെയ്യുക",
    fallback_notice: "മൂല വാചകം ({language}) കാണിക്കുന്നു. ഇതുവരെ വിവർത്തനമില്ല.",
    auto_translated_badge: "യാന്ത്രിക വിവർത്തനം",
    translation_failed: "വിവർത്തനം പരാജയപ്പെട്ടു. വീണ്ടും ശ്രമിക്കാൻ ടാപ്പ് ചെയ്യുക.",
    rate_limited: "വളരെയധികം വിവർത്തന അഭ്യർത്ഥനകൾ. അൽപ്പസമയത്തിന് ശേഷം ശ്രമിക്കുക.",
    unsupported_language: "ഈ ഭാഷയ്ക്ക് വിവർത്തനം ലഭ്യമല്ല.",
};

// ==================== Punjabi Strings ====================

pub const PUNJABI_STRINGS: LanguageStrings = LanguageStrings {
    translate_action: "ਅਨੁਵਾਦ ਕਰੋ",
    translate_all_action: "ਸਾਰੀਆਂ ਭਾਸ਼ਾਵਾਂ ਵਿੱਚ ਅਨੁਵਾਦ ਕਰੋ",
    fallback_notice: "ਮੂਲ ਲਿਖਤ ({language}) ਦਿਖਾਈ ਜਾ ਰਹੀ ਹੈ। ਅਜੇ ਅਨੁਵਾਦ ਨਹੀਂ ਹੈ।",
    auto_translated_badge: "ਸਵੈਚਲਿਤ ਅਨੁਵਾਦ",
    translation_failed: "ਅਨੁਵਾਦ ਅਸਫਲ ਰਿਹਾ। ਦੁਬਾਰਾ ਕੋਸ਼ਿਸ਼ ਕਰਨ ਲਈ ਟੈਪ ਕਰੋ।",
    rate_limited: "ਬਹੁਤ ਸਾਰੀਆਂ ਅਨੁਵਾਦ ਬੇਨਤੀਆਂ। ਕੁਝ ਦੇਰ ਬਾਅਦ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
    unsupported_language: "ਇਸ ਭਾਸ਼ਾ ਲਈ ਅਨੁਵਾਦ ਉਪਲਬਧ ਨਹੀਂ ਹੈ।",
};
