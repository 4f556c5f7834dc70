//! Settings documents selecting how slugs are derived.
//!
//! The raw document mirrors the YAML consumed by callers and keeps values
//! optional; [`parse_settings`] resolves it into validated [`SlugSettings`].
//! A blank or unknown locale is a configuration error and is reported
//! instead of silently falling back to the default bundle.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{self, Error},
    locale::Locale,
    slug::SlugStrategy,
    source::SlugSource,
};

/// Raw settings document before validation.
///
/// # Examples
///
/// ```
/// use slugsmith::SettingsDocument;
///
/// let document: SettingsDocument = serde_yaml::from_str("locale: de",).expect("valid yaml",);
/// assert_eq!(document.locale.as_deref(), Some("de"));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument
{
    /// Optional locale identifier; the default bundle applies when absent.
    #[serde(default, alias = "language", alias = "lang")]
    pub locale: Option<String,>,
}

/// Validated settings used to derive slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default,)]
pub struct SlugSettings
{
    /// Locale applied to every slug derived with these settings.
    pub locale: Locale,
}

impl SlugSettings
{
    /// Derives a slug with the configured locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugsmith::parse_settings;
    ///
    /// let settings = parse_settings("locale: de",).expect("valid settings",);
    /// assert_eq!(settings.slug_of("1.000 Pizzen",), "1000-pizzen");
    /// ```
    pub fn slug_of<S,>(&self, value: &S,) -> String
    where
        S: SlugSource + ?Sized,
    {
        SlugStrategy::builder(value,).locale(self.locale,).build()
    }
}

impl TryFrom<SettingsDocument,> for SlugSettings
{
    type Error = Error;

    fn try_from(document: SettingsDocument,) -> Result<Self, Self::Error,>
    {
        let locale = match document.locale {
            None => Locale::default(),
            Some(identifier,) => {
                let trimmed = identifier.trim();
                if trimmed.is_empty() {
                    return Err(Error::validation("locale must not be blank",),);
                }
                trimmed.parse()?
            }
        };

        Ok(Self {
            locale,
        },)
    }
}

/// Loads slug settings from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the locale is blank or unknown.
pub fn load_settings(path: &Path,) -> Result<SlugSettings, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    debug!("loading slug settings from {}", path.display());
    parse_settings(&contents,)
}

/// Parses slug settings from the provided YAML document string.
///
/// An empty document yields the default settings.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded,
/// [`Error::Validation`](Error::Validation) for a blank locale and
/// [`Error::UnknownLocale`](Error::UnknownLocale) for an unknown one.
pub fn parse_settings(contents: &str,) -> Result<SlugSettings, Error,>
{
    if contents.trim().is_empty() {
        return Ok(SlugSettings::default(),);
    }

    let document: SettingsDocument = serde_yaml::from_str(contents,)?;
    let settings = SlugSettings::try_from(document,)?;
    debug!("resolved slug settings with locale {}", settings.locale);
    Ok(settings,)
}
