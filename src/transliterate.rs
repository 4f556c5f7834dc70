// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Diacritic stripping and letter transliteration.
//!
//! Text is composed first so that `a` followed by a combining diaeresis hits
//! the same table entry as the precomposed `ä`. Table entries win; every
//! other letter is decomposed and loses its combining marks.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::locale::LocaleRules;

/// Replaces table letters with their ASCII spelling and strips remaining
/// diacritics from everything else.
pub(crate) fn strip_diacritics(text: &str, rules: &LocaleRules,) -> String
{
    let mut transliterated = String::with_capacity(text.len(),);
    for letter in text.nfc() {
        match rules.transliteration(letter,) {
            Some(spelling,) => transliterated.push_str(spelling,),
            None => transliterated.push(letter,),
        }
    }

    transliterated.nfd().filter(|candidate| !is_combining_mark(*candidate,),).collect()
}

#[cfg(test)]
mod tests
{
    use super::strip_diacritics;
    use crate::Locale;

    fn strip(text: &str,) -> String
    {
        strip_diacritics(text, Locale::International.rules(),)
    }

    #[test]
    fn removes_accents_from_precomposed_letters()
    {
        assert_eq!(strip("Frère Jacques"), "Frere Jacques");
        assert_eq!(strip("crème brûlée"), "creme brulee");
    }

    #[test]
    fn combining_sequences_match_precomposed_letters()
    {
        assert_eq!(strip("Fre\u{300}re Ha\u{308}nschen"), "Frere Haenschen");
        assert_eq!(strip("Ha\u{308}nschen"), strip("Hänschen"));
    }

    #[test]
    fn table_takes_precedence_over_decomposition()
    {
        assert_eq!(strip("Bjørn Müller-Faßbinder"), "Bjoern Mueller-Fassbinder");
        assert_eq!(strip("Æsir Œuvre"), "Aesir Oeuvre");
    }

    #[test]
    fn leaves_unrelated_symbols_untouched()
    {
        assert_eq!(strip("180° ½ $5"), "180° ½ $5");
        assert_eq!(strip("日本"), "日本");
    }

    #[test]
    fn reapplying_is_a_no_op()
    {
        let once = strip("Ångström Þór ıi",);
        assert_eq!(strip(&once), once);
    }
}
