//! Locale-aware conversion of arbitrary values into readable ASCII slugs.
//!
//! The crate runs text through an ordered rule pipeline: diacritics are
//! stripped, money amounts and numbers are spoken, dots are disambiguated,
//! logograms become words, separators are normalized and everything
//! unreadable is dropped. The result is a lowercase, dash-joined slug that is
//! stable for a given input and locale.
//!
//! ```
//! use slugsmith::{Locale, SlugStrategy, slug_of};
//!
//! assert_eq!(slug_of("100 $1 popsicles",), "100-one-dollar-popsicles");
//! assert_eq!(
//!     SlugStrategy::builder("31.12.2018 09:00",).locale(Locale::German,).build(),
//!     "31-12-2018-09-00"
//! );
//! ```

mod config;
mod dots;
mod error;
mod locale;
mod logogram;
mod money;
mod pipeline;
mod readable;
mod scan;
mod separator;
mod slug;
mod source;
mod tables;
mod transliterate;

pub use config::{SettingsDocument, SlugSettings, load_settings, parse_settings};
pub use error::{Error, io_error};
pub use locale::{Locale, LocaleData, LocaleRules, MoneyTemplate};
pub use slug::{SlugStrategy, slug_all, slug_of, slug_of_in};
pub use source::SlugSource;
