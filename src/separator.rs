// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Separator normalization: underscores and datetime separators become
//! dashes, apostrophes disappear and whitespace runs collapse.

use crate::{locale::LocaleRules, scan};

const APOSTROPHES: [char; 5] = ['\'', '\u{2019}', '\u{2018}', '\u{2bc}', '`',];

/// Normalizes separators left over by the earlier stages.
pub(crate) fn normalize_separators(text: &str, rules: &LocaleRules,) -> String
{
    let mut dated = text.replace(APOSTROPHES, "",);
    for &separator in rules.data().datetime_separators {
        dated = scan::replace_between(&dated, separator, scan::digits_around, |out| {
            out.push('-',)
        },);
    }

    let mut normalized = String::with_capacity(dated.len(),);
    let mut in_whitespace = false;
    for candidate in dated.chars() {
        if candidate.is_whitespace() {
            if !in_whitespace {
                normalized.push(' ',);
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        normalized.push(if candidate == '_' { '-' } else { candidate },);
    }
    normalized
}
