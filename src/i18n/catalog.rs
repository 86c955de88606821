//! Language catalog: single source of truth for the supported languages.
//!
//! The built-in catalog holds the ten marketplace languages and is initialised
//! once through `OnceLock`. Narrower catalogs can be derived from it with
//! [`LanguageCatalog::subset`], which keeps every code valid.

use crate::i18n::LanguageCode;
use std::sync::OnceLock;

/// Read-only metadata for one supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "Hindi")
    pub english_name: &'static str,

    /// Name of the language in its own script (e.g., "हिन्दी")
    pub native_name: &'static str,

    /// Single glyph shown on the language tab (e.g., "अ")
    pub display_glyph: &'static str,
}

impl LanguageDescriptor {
    /// The validated code for this descriptor.
    pub fn language(&self) -> LanguageCode {
        LanguageCode::from_static(self.code)
    }
}

/// Immutable registry of supported languages.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<LanguageDescriptor>,
}

/// Built-in catalog instance (initialized lazily)
static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Get the built-in catalog of all ten supported languages.
    ///
    /// The catalog is built on first call; later calls return the same instance.
    pub fn get() -> &'static LanguageCatalog {
        CATALOG.get_or_init(|| LanguageCatalog {
            languages: builtin_languages(),
        })
    }

    /// Build a catalog restricted to the given languages, in the order given.
    ///
    /// Duplicates are ignored.
    pub fn subset(codes: &[LanguageCode]) -> LanguageCatalog {
        let mut languages: Vec<LanguageDescriptor> = Vec::with_capacity(codes.len());
        for code in codes {
            if languages.iter().any(|lang| lang.code == code.code()) {
                continue;
            }
            if let Some(descriptor) = Self::get().get_by_code(code.code()) {
                languages.push(descriptor.clone());
            }
        }
        LanguageCatalog { languages }
    }

    /// All descriptors, in catalog order.
    pub fn all(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    /// Get a descriptor by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageDescriptor)` if the language exists
    /// * `None` if the code is not in this catalog
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Iterate over the validated codes of this catalog.
    pub fn codes(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.languages.iter().map(LanguageDescriptor::language)
    }

    /// Check whether a language is part of this catalog.
    pub fn contains(&self, language: LanguageCode) -> bool {
        self.get_by_code(language.code()).is_some()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// The ten marketplace languages.
fn builtin_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor {
            code: "en",
            english_name: "English",
            native_name: "English",
            display_glyph: "A",
        },
        LanguageDescriptor {
            code: "hi",
            english_name: "Hindi",
            native_name: "हिन्दी",
            display_glyph: "अ",
        },
        LanguageDescriptor {
            code: "bn",
            english_name: "Bengali",
            native_name: "বাংলা",
            display_glyph: "অ",
        },
        LanguageDescriptor {
            code: "te",
            english_name: "Telugu",
            native_name: "తెలుగు",
            display_glyph: "అ",
        },
        LanguageDescriptor {
            code: "mr",
            english_name: "Marathi",
            native_name: "मराठी",
            display_glyph: "म",
        },
        LanguageDescriptor {
            code: "ta",
            english_name: "Tamil",
            native_name: "தமிழ்",
            display_glyph: "அ",
        },
        LanguageDescriptor {
            code: "gu",
            english_name: "Gujarati",
            native_name: "ગુજરાતી",
            display_glyph: "અ",
        },
        LanguageDescriptor {
            code: "kn",
            english_name: "Kannada",
            native_name: "ಕನ್ನಡ",
            display_glyph: "ಅ",
        },
        LanguageDescriptor {
            code: "ml",
            english_name: "Malayalam",
            native_name: "മലയാളം",
            display_glyph: "അ",
        },
        LanguageDescriptor {
            code: "pa",
            english_name: "Punjabi",
            native_name: "ਪੰਜਾਬੀ",
            display_glyph: "ਅ",
        },
    ]
}
