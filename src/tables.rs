// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Static vocabulary backing the built-in locale bundles.
//!
//! All replacement words are stored in plain ASCII so that no later pipeline
//! stage needs to touch them again.

use crate::locale::{LocaleData, MoneyTemplate};

/// Letters that lose meaning when their marks are stripped, or that do not
/// decompose at all, mapped to their conventional ASCII spelling.
const TRANSLITERATIONS: &[(char, &str,)] = &[
    ('ß', "ss",),
    ('ẞ', "SS",),
    ('ä', "ae",),
    ('Ä', "Ae",),
    ('ö', "oe",),
    ('Ö', "Oe",),
    ('ü', "ue",),
    ('Ü', "Ue",),
    ('ø', "oe",),
    ('Ø', "Oe",),
    ('æ', "ae",),
    ('Æ', "Ae",),
    ('œ', "oe",),
    ('Œ', "Oe",),
    ('å', "aa",),
    ('Å', "Aa",),
    ('þ', "th",),
    ('Þ', "Th",),
    ('ð', "d",),
    ('Ð', "D",),
    ('đ', "d",),
    ('Đ', "D",),
    ('ł', "l",),
    ('Ł', "L",),
    ('ŀ', "l",),
    ('Ŀ', "L",),
    ('ı', "i",),
    ('ħ', "h",),
    ('Ħ', "H",),
    ('ŋ', "ng",),
    ('Ŋ', "Ng",),
    ('ĳ', "ij",),
    ('Ĳ', "IJ",),
    ('ſ', "s",),
    ('ƒ', "f",),
];

const INTERNATIONAL_MONEY: &[MoneyTemplate] = &[
    MoneyTemplate::new('$', "dollar", "dollars", "cent", "cents",),
    MoneyTemplate::new('€', "euro", "euros", "cent", "cents",),
    MoneyTemplate::new('£', "pound", "pounds", "penny", "pence",),
    MoneyTemplate::new('¥', "yen", "yen", "sen", "sen",),
];

const GERMAN_MONEY: &[MoneyTemplate] = &[
    MoneyTemplate::new('$', "dollar", "dollar", "cent", "cent",),
    MoneyTemplate::new('€', "euro", "euro", "cent", "cent",),
    MoneyTemplate::new('£', "pfund", "pfund", "penny", "pence",),
    MoneyTemplate::new('¥', "yen", "yen", "sen", "sen",),
];

const INTERNATIONAL_LOGOGRAMS: &[(&str, &str,)] = &[
    ("°", "degrees",),
    ("½", "half",),
    ("⅓", "one third",),
    ("⅔", "two thirds",),
    ("¼", "quarter",),
    ("¾", "three quarters",),
    ("⅛", "one eighth",),
    ("&", "and",),
    ("@", "at",),
    ("%", "percent",),
    ("‰", "per mille",),
    ("+", "plus",),
    ("=", "equals",),
    ("×", "times",),
    ("§", "section",),
    ("w/o", "without",),
    ("w/", "with",),
    ("c/o", "care of",),
];

const GERMAN_LOGOGRAMS: &[(&str, &str,)] = &[
    ("°", "grad",),
    ("½", "halb",),
    ("⅓", "ein drittel",),
    ("⅔", "zwei drittel",),
    ("¼", "viertel",),
    ("¾", "dreiviertel",),
    ("⅛", "ein achtel",),
    ("&", "und",),
    ("@", "at",),
    ("%", "prozent",),
    ("‰", "promille",),
    ("+", "plus",),
    ("=", "gleich",),
    ("×", "mal",),
    ("§", "paragraph",),
];

/// Default bundle: `.` decimals, `,` grouping, English vocabulary.
pub(crate) static INTERNATIONAL: LocaleData = LocaleData {
    decimal_separator:     '.',
    thousands_separator:   ',',
    datetime_separators:   &['/', ':',],
    money_templates:       INTERNATIONAL_MONEY,
    logogram_translations: INTERNATIONAL_LOGOGRAMS,
    transliteration_table: TRANSLITERATIONS,
    dot_word:              "dot",
    decimal_word:          "point",
    hashtag_word:          "hashtag",
    number_sign_word:      "number",
    alternation_word:      None,
    number_words:          [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
};

/// German bundle: `,` decimals, `.` grouping, dotted dates.
pub(crate) static GERMAN: LocaleData = LocaleData {
    decimal_separator:     ',',
    thousands_separator:   '.',
    datetime_separators:   &['.', '/', ':',],
    money_templates:       GERMAN_MONEY,
    logogram_translations: GERMAN_LOGOGRAMS,
    transliteration_table: TRANSLITERATIONS,
    dot_word:              "punkt",
    decimal_word:          "komma",
    hashtag_word:          "hashtag",
    number_sign_word:      "nummer",
    alternation_word:      Some("oder",),
    number_words:          [
        "null", "ein", "zwei", "drei", "vier", "fuenf", "sechs", "sieben", "acht", "neun",
    ],
};

#[cfg(test)]
mod tests
{
    use super::{GERMAN, INTERNATIONAL};

    #[test]
    fn vocabulary_is_ascii()
    {
        for data in [&INTERNATIONAL, &GERMAN,] {
            let words = data
                .logogram_translations
                .iter()
                .map(|(_, word,)| *word,)
                .chain(data.transliteration_table.iter().map(|(_, word,)| *word,),)
                .chain(data.number_words,)
                .chain([
                    data.dot_word,
                    data.decimal_word,
                    data.hashtag_word,
                    data.number_sign_word,
                ],)
                .chain(data.alternation_word,);
            for word in words {
                assert!(word.is_ascii(), "non-ascii vocabulary: {word}");
            }
        }
    }

    #[test]
    fn separators_differ_within_each_locale()
    {
        for data in [&INTERNATIONAL, &GERMAN,] {
            assert_ne!(data.decimal_separator, data.thousands_separator);
        }
    }

    #[test]
    fn currency_symbols_are_unique_per_locale()
    {
        for data in [&INTERNATIONAL, &GERMAN,] {
            let mut symbols: Vec<char,> =
                data.money_templates.iter().map(|template| template.symbol,).collect();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), data.money_templates.len());
        }
    }
}
