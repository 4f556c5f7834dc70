// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Locale bundles consumed by the slug pipeline.
//!
//! A locale is plain data: number formatting, money vocabulary, logograms and
//! transliterations. Each bundle is compiled into [`LocaleRules`] at most once
//! per process and published only after it is fully built, so concurrent
//! readers never observe a partially constructed table.

use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::{error::Error, tables};

/// Identifier of a statically known locale bundle.
///
/// # Examples
///
/// ```
/// use slugsmith::Locale;
///
/// let locale: Locale = "de".parse().expect("known locale",);
/// assert_eq!(locale, Locale::German);
/// assert!("xx".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,)]
pub enum Locale
{
    /// Default bundle with English vocabulary and `1,000.50` numbers.
    #[default]
    International,
    /// German bundle with `1.000,50` numbers and dotted dates.
    German,
}

impl Locale
{
    /// Every locale supported by the crate.
    pub const ALL: [Locale; 2] = [Locale::International, Locale::German,];

    /// Returns the canonical identifier of the locale.
    pub fn id(self,) -> &'static str
    {
        match self {
            Locale::International => "en",
            Locale::German => "de",
        }
    }

    /// Returns the process-wide compiled rules for this locale.
    pub fn rules(self,) -> &'static LocaleRules
    {
        match self {
            Locale::International => &INTERNATIONAL_RULES,
            Locale::German => &GERMAN_RULES,
        }
    }
}

impl FromStr for Locale
{
    type Err = Error;

    fn from_str(identifier: &str,) -> Result<Self, Self::Err,>
    {
        match identifier {
            "en" | "default" | "international" => Ok(Locale::International,),
            "de" => Ok(Locale::German,),
            _ => Err(Error::unknown_locale(identifier,),),
        }
    }
}

impl fmt::Display for Locale
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.id(),)
    }
}

/// Major and minor unit words for one currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct MoneyTemplate
{
    /// Currency symbol as written in text.
    pub symbol:         char,
    /// Major unit used for an amount of exactly one.
    pub singular_major: &'static str,
    /// Major unit used for every other amount.
    pub plural_major:   &'static str,
    /// Minor unit used for a fraction of exactly one.
    pub singular_minor: &'static str,
    /// Minor unit used for every other fraction.
    pub plural_minor:   &'static str,
}

impl MoneyTemplate
{
    pub(crate) const fn new(
        symbol: char,
        singular_major: &'static str,
        plural_major: &'static str,
        singular_minor: &'static str,
        plural_minor: &'static str,
    ) -> Self
    {
        Self {
            symbol,
            singular_major,
            plural_major,
            singular_minor,
            plural_minor,
        }
    }
}

/// Raw, uncompiled description of a locale.
#[derive(Debug,)]
pub struct LocaleData
{
    /// Separator between integer and fractional digits.
    pub decimal_separator:     char,
    /// Separator between groups of three integer digits.
    pub thousands_separator:   char,
    /// Characters that separate date and time components between digits.
    pub datetime_separators:   &'static [char],
    /// Money vocabulary keyed by currency symbol.
    pub money_templates:       &'static [MoneyTemplate],
    /// Symbols and shorthands translated into words.
    pub logogram_translations: &'static [(&'static str, &'static str,)],
    /// Letters replaced by a fixed ASCII spelling.
    pub transliteration_table: &'static [(char, &'static str,)],
    /// Word for a dot inside a token such as a domain name.
    pub dot_word:              &'static str,
    /// Word for a decimal separator other than `.` between digits.
    pub decimal_word:          &'static str,
    /// Word announcing a `#` followed by letters.
    pub hashtag_word:          &'static str,
    /// Word announcing a `#` followed by digits.
    pub number_sign_word:      &'static str,
    /// Word for a slash joining two words; without one the slash only
    /// separates the words.
    pub alternation_word:      Option<&'static str,>,
    /// Spelled forms of single-digit money amounts.
    pub number_words:          [&'static str; 10],
}

/// Compiled, immutable rules for one locale.
#[derive(Debug,)]
pub struct LocaleRules
{
    locale:           Locale,
    data:             &'static LocaleData,
    transliterations: HashMap<char, &'static str,>,
    currencies:       HashMap<char, &'static MoneyTemplate,>,
    logograms:        HashMap<&'static str, &'static str,>,
    prefix_money:     Regex,
    suffix_money:     Regex,
    grouped_numeral:  Regex,
    logogram_pattern: Regex,
    number_sign:      Regex,
}

static INTERNATIONAL_RULES: LazyLock<LocaleRules,> =
    LazyLock::new(|| LocaleRules::compile(Locale::International, &tables::INTERNATIONAL,),);

static GERMAN_RULES: LazyLock<LocaleRules,> =
    LazyLock::new(|| LocaleRules::compile(Locale::German, &tables::GERMAN,),);

impl LocaleRules
{
    fn compile(locale: Locale, data: &'static LocaleData,) -> Self
    {
        let symbols: String = data
            .money_templates
            .iter()
            .map(|template| regex::escape(&template.symbol.to_string(),),)
            .collect();
        let numeral = numeral_pattern(data,);

        let rules = Self {
            locale,
            data,
            transliterations: data.transliteration_table.iter().copied().collect(),
            currencies: data
                .money_templates
                .iter()
                .map(|template| (template.symbol, template,),)
                .collect(),
            logograms: data.logogram_translations.iter().copied().collect(),
            prefix_money: compile_pattern(&format!(
                r"(?P<symbol>[{symbols}])\s?(?P<amount>{numeral})"
            ),),
            suffix_money: compile_pattern(&format!(
                r"(?P<amount>{numeral})\s?(?P<symbol>[{symbols}])"
            ),),
            grouped_numeral: compile_pattern(&format!(
                r"[0-9]{{1,3}}(?:{}[0-9]{{3}})+",
                regex::escape(&data.thousands_separator.to_string(),)
            ),),
            logogram_pattern: compile_pattern(&logogram_pattern(data.logogram_translations,),),
            number_sign: compile_pattern(r"#(?:(?P<tag>\p{L}[\p{L}\p{N}_]*)|(?P<number>[0-9]+))",),
        };

        debug!(
            "compiled locale rules for {} ({} currencies, {} logograms)",
            locale,
            rules.currencies.len(),
            rules.logograms.len()
        );
        rules
    }

    /// Locale these rules were compiled for.
    pub fn locale(&self,) -> Locale
    {
        self.locale
    }

    /// Raw data the rules were compiled from.
    pub fn data(&self,) -> &'static LocaleData
    {
        self.data
    }

    pub(crate) fn transliteration(&self, letter: char,) -> Option<&'static str,>
    {
        self.transliterations.get(&letter,).copied()
    }

    pub(crate) fn currency(&self, symbol: char,) -> Option<&'static MoneyTemplate,>
    {
        self.currencies.get(&symbol,).copied()
    }

    pub(crate) fn logogram(&self, pattern: &str,) -> Option<&'static str,>
    {
        self.logograms.get(pattern,).copied()
    }

    pub(crate) fn prefix_money(&self,) -> &Regex
    {
        &self.prefix_money
    }

    pub(crate) fn suffix_money(&self,) -> &Regex
    {
        &self.suffix_money
    }

    pub(crate) fn grouped_numeral(&self,) -> &Regex
    {
        &self.grouped_numeral
    }

    pub(crate) fn logogram_pattern(&self,) -> &Regex
    {
        &self.logogram_pattern
    }

    pub(crate) fn number_sign(&self,) -> &Regex
    {
        &self.number_sign
    }

    /// Whether `separator` splits date or time components in this locale.
    pub(crate) fn is_datetime_separator(&self, separator: char,) -> bool
    {
        self.data.datetime_separators.contains(&separator,)
    }
}

/// Numeral with optional grouping delimiters and an optional fraction.
fn numeral_pattern(data: &LocaleData,) -> String
{
    let thousands = regex::escape(&data.thousands_separator.to_string(),);
    let decimal = regex::escape(&data.decimal_separator.to_string(),);
    format!(
        r"[0-9]{{1,3}}(?:{thousands}[0-9]{{3}})+(?:{decimal}[0-9]+)?|[0-9]+(?:{decimal}[0-9]+)?"
    )
}

/// Alternation over every logogram, longest first, so that `w/o` wins over
/// `w/`. Patterns that begin or end with an ASCII letter or digit are
/// anchored to word boundaries on that side. Glyphs such as `½` count as
/// alphanumeric for `char` but not as word characters for the regex, so an
/// anchor next to them would never match.
fn logogram_pattern(translations: &[(&str, &str,)],) -> String
{
    let mut patterns: Vec<&str,> = translations.iter().map(|(pattern, _,)| *pattern,).collect();
    patterns.sort_by(|left, right| right.chars().count().cmp(&left.chars().count(),),);

    patterns
        .iter()
        .map(|pattern| {
            let leading = if pattern.starts_with(is_ascii_word,) { r"\b" } else { "" };
            let trailing = if pattern.ends_with(is_ascii_word,) { r"\b" } else { "" };
            format!("{leading}{}{trailing}", regex::escape(pattern,))
        },)
        .collect::<Vec<_,>>()
        .join("|",)
}

fn is_ascii_word(candidate: char,) -> bool
{
    candidate.is_ascii_alphanumeric()
}

/// Compiles one of the built-in patterns.
///
/// Every pattern is assembled from the static tables in [`tables`], and the
/// test suite compiles the rules of every locale, so a failure here is a
/// defect in those tables rather than a runtime condition.
fn compile_pattern(source: &str,) -> Regex
{
    Regex::new(source,)
        .unwrap_or_else(|error| panic!("built-in slug pattern {source:?} is invalid: {error}"),)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn every_locale_compiles_and_reports_itself()
    {
        for locale in Locale::ALL {
            assert_eq!(locale.rules().locale(), locale);
        }
    }

    #[test]
    fn identifiers_round_trip_through_from_str()
    {
        for locale in Locale::ALL {
            assert_eq!(locale.id().parse::<Locale,>().expect("known id",), locale);
            assert_eq!(locale.to_string(), locale.id());
        }
        assert_eq!("default".parse::<Locale,>().expect("alias",), Locale::International);
    }

    #[test]
    fn unknown_identifier_fails_fast()
    {
        let error = "fr".parse::<Locale,>().expect_err("fr is not bundled",);
        assert!(matches!(error, Error::UnknownLocale { ref identifier } if identifier == "fr"));
        assert!("DE".parse::<Locale,>().is_err());
        assert!("".parse::<Locale,>().is_err());
    }

    #[test]
    fn default_locale_is_international()
    {
        assert_eq!(Locale::default(), Locale::International);
    }

    #[test]
    fn lookups_use_locale_tables()
    {
        let rules = Locale::German.rules();
        assert_eq!(rules.transliteration('ß'), Some("ss"));
        assert_eq!(rules.currency('$').map(|template| template.plural_major), Some("dollar"));
        assert_eq!(rules.logogram("°"), Some("grad"));
        assert!(rules.is_datetime_separator('.'));
        assert!(!Locale::International.rules().is_datetime_separator('.'));
    }

    #[test]
    fn logogram_alternation_prefers_longest_pattern()
    {
        let pattern = logogram_pattern(&[("w/", "with",), ("w/o", "without",),],);
        assert!(pattern.starts_with(r"\bw/o\b"), "unexpected order: {pattern}");
        let regex = Regex::new(&pattern,).expect("valid pattern",);
        assert_eq!(regex.find("coffee w/o milk").map(|found| found.as_str()), Some("w/o"));
    }

    #[test]
    fn fraction_glyphs_are_not_anchored()
    {
        let pattern = logogram_pattern(&[("½", "half",), ("c/o", "care of",),],);
        assert!(pattern.split('|',).any(|alternative| alternative == "½"), "unexpected pattern: {pattern}");
        let regex = Regex::new(&pattern,).expect("valid pattern",);
        assert_eq!(regex.find("a ½ turn").map(|found| found.as_str()), Some("½"));
        assert_eq!(regex.find("3½ cups").map(|found| found.as_str()), Some("½"));
    }

    #[test]
    fn numeral_pattern_follows_locale_separators()
    {
        let german = Regex::new(&format!("^(?:{})$", numeral_pattern(&tables::GERMAN,)),)
            .expect("valid pattern",);
        assert!(german.is_match("5.000,50"));
        assert!(german.is_match("12"));
        assert!(!german.is_match("5,000.50"));
    }
}
