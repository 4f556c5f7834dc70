// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving readable slugs from arbitrary values.
//!
//! Slugs produced by this module contain only lowercase ASCII alphanumeric
//! characters separated by single hyphens, making them suitable for URLs,
//! branch names and filesystem paths across platforms. Symbols that carry
//! meaning (money, significant dots, logograms) are spoken as words of the
//! selected locale instead of being discarded.

use std::borrow::Cow;

use rayon::prelude::*;

use crate::{error::Error, locale::Locale, pipeline, source::SlugSource};

/// Builder for slug strings.
#[derive(Debug, Clone,)]
pub struct SlugStrategy<'input,>
{
    source: Cow<'input, str,>,
    locale: Locale,
}

impl<'input,> SlugStrategy<'input,>
{
    /// Creates a new slug builder for the provided value using the default
    /// locale.
    ///
    /// The builder borrows textual sources and only allocates for values that
    /// must first be formatted, such as numbers.
    pub fn builder<S,>(source: &'input S,) -> Self
    where
        S: SlugSource + ?Sized,
    {
        Self {
            source: source.to_slug_source(), locale: Locale::default(),
        }
    }

    /// Selects the locale whose number formats and vocabulary apply.
    pub fn locale(mut self, locale: Locale,) -> Self
    {
        self.locale = locale;
        self
    }

    /// Builds a slug from the source value. The slug contains only
    /// lowercase ASCII alphanumeric characters and single hyphen separators,
    /// and is empty when nothing slug-worthy remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugsmith::{Locale, SlugStrategy};
    ///
    /// let slug = SlugStrategy::builder("Visit github.com",).build();
    /// assert_eq!(slug, "visit-github-dot-com");
    ///
    /// let slug = SlugStrategy::builder("5.000,50 $",).locale(Locale::German,).build();
    /// assert_eq!(slug, "5000-dollar-50-cent");
    /// ```
    pub fn build(&self,) -> String
    {
        let words = pipeline::run(&self.source, self.locale.rules(),);
        assemble(&words,)
    }
}

/// Lowercases the remaining words and joins them with single hyphens.
fn assemble(words: &str,) -> String
{
    let mut slug = String::with_capacity(words.len(),);
    let mut previous_hyphen = false;

    for candidate in words.chars() {
        match candidate {
            'A'..='Z' => {
                slug.push(candidate.to_ascii_lowercase(),);
                previous_hyphen = false;
            }
            'a'..='z' | '0'..='9' => {
                slug.push(candidate,);
                previous_hyphen = false;
            }
            _ => {
                if !previous_hyphen && !slug.is_empty() {
                    slug.push('-',);
                    previous_hyphen = true;
                }
            }
        }
    }

    while slug.ends_with('-',) {
        slug.pop();
    }

    slug
}

/// Derives a slug with the default locale.
///
/// # Examples
///
/// ```
/// use slugsmith::slug_of;
///
/// assert_eq!(slug_of("$5,000.50",), "5000-dollars-50-cents");
/// assert_eq!(slug_of(&None::<&str>,), "");
/// ```
pub fn slug_of<S,>(value: &S,) -> String
where
    S: SlugSource + ?Sized,
{
    SlugStrategy::builder(value,).build()
}

/// Derives a slug with the locale named by `locale_id`.
///
/// # Errors
///
/// Returns [`Error::UnknownLocale`] when `locale_id` does not name a bundled
/// locale; no slug is produced with a substitute locale.
///
/// # Examples
///
/// ```
/// use slugsmith::slug_of_in;
///
/// let slug = slug_of_in("heute/morgen", "de",).expect("german is bundled",);
/// assert_eq!(slug, "heute-oder-morgen");
/// assert!(slug_of_in("bonjour", "fr",).is_err());
/// ```
pub fn slug_of_in<S,>(value: &S, locale_id: &str,) -> Result<String, Error,>
where
    S: SlugSource + ?Sized,
{
    let locale: Locale = locale_id.parse()?;
    Ok(SlugStrategy::builder(value,).locale(locale,).build(),)
}

/// Derives slugs for many values in parallel, preserving input order.
pub fn slug_all<S,>(values: &[S], locale: Locale,) -> Vec<String,>
where
    S: SlugSource + Sync,
{
    values.par_iter().map(|value| SlugStrategy::builder(value,).locale(locale,).build(),).collect()
}
