// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Logogram and symbol translation.
//!
//! Runs after money recognition, so currency symbols bound to an amount are
//! already gone and are never translated generically.

use regex::Captures;

use crate::{locale::LocaleRules, scan};

/// Translates number signs, table logograms and word alternations.
pub(crate) fn translate_logograms(text: &str, rules: &LocaleRules,) -> String
{
    let data = rules.data();

    let signed = rules.number_sign().replace_all(text, |captures: &Captures<'_,>| {
        match (captures.name("tag",), captures.name("number",),) {
            (Some(tag,), _,) => format!(" {} {} ", data.hashtag_word, tag.as_str()),
            (_, Some(number,),) => format!(" {} {} ", data.number_sign_word, number.as_str()),
            _ => captures[0].to_owned(),
        }
    },);

    let translated = rules.logogram_pattern().replace_all(&signed, |captures: &Captures<'_,>| {
        let matched = &captures[0];
        match rules.logogram(matched,) {
            Some(word,) => format!(" {word} "),
            None => matched.to_owned(),
        }
    },);

    scan::replace_between(
        &translated,
        '/',
        |before, after| {
            before.is_some_and(char::is_alphabetic,) && after.is_some_and(char::is_alphabetic,)
        },
        |out| {
            out.push(' ',);
            if let Some(word,) = data.alternation_word {
                out.push_str(word,);
                out.push(' ',);
            }
        },
    )
}
