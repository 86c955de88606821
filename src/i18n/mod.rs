//! Internationalization (i18n) module: supported languages and the
//! machinery around translating user content.
//!
//! # Architecture
//!
//! - `catalog`: Single source of truth for the ten supported languages
//! - `language`: Catalog-validated `LanguageCode` type
//! - `strings`: Localized UI strings shown around translated content
//! - `validator`: Post-translation sanity checks
//! - `metrics`: Per-coordinator translation counters
//!
//! # Example
//!
//! ```rust
//! use polyglot_listings::i18n::{LanguageCatalog, LanguageCode};
//!
//! let hindi = LanguageCode::from_code("hi").unwrap();
//! assert_eq!(hindi.native_name(), "हिन्दी");
//! assert_eq!(LanguageCatalog::get().all().len(), 10);
//! ```

mod catalog;
mod language;
mod metrics;
mod strings;
mod validator;

pub use catalog::{LanguageCatalog, LanguageDescriptor};
pub use language::LanguageCode;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use strings::LanguageStrings;
pub use validator::{TranslationValidator, ValidationReport};
