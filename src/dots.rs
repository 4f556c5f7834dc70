// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Dot and ellipsis disambiguation.
//!
//! Every dot is classified once, in priority order: part of an ellipsis,
//! sentence terminal, numeral separator kept for the datetime stage, or a
//! significant dot spoken as the locale's word. Classification looks at the
//! original neighbours of the dot, never at text rewritten earlier in the
//! same scan.

use crate::locale::LocaleRules;

const ELLIPSIS: char = '…';

/// Role a dot plays in its surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
enum DotRole
{
    /// Two or more dots, optionally spaced; `end` is the index after the run
    /// and the whitespace trailing it.
    Ellipsis
    {
        end: usize,
    },
    /// Followed by whitespace or the end of the text.
    Terminal,
    /// Preceded by whitespace or the start of the text.
    Stray,
    /// Between digits in a locale that writes dates with dots.
    Numeral,
    /// Inside a token such as a domain name.
    Significant,
}

fn is_dot(candidate: char,) -> bool
{
    candidate == '.' || candidate == ELLIPSIS
}

fn classify(chars: &[char], index: usize, rules: &LocaleRules,) -> DotRole
{
    let mut dots = 0;
    let mut cursor = index;
    while let Some(&candidate,) = chars.get(cursor,) {
        if candidate == ELLIPSIS {
            dots += 2;
        } else if candidate == '.' {
            dots += 1;
        } else if !candidate.is_whitespace() {
            break;
        }
        cursor += 1;
    }
    if dots >= 2 {
        return DotRole::Ellipsis {
            end: cursor,
        };
    }

    let before = index.checked_sub(1,).and_then(|previous| chars.get(previous,),);
    let after = chars.get(index + 1,);
    match (before, after,) {
        (_, None,) => DotRole::Terminal,
        (_, Some(next,),) if next.is_whitespace() => DotRole::Terminal,
        (None, _,) => DotRole::Stray,
        (Some(previous,), _,) if previous.is_whitespace() => DotRole::Stray,
        (Some(previous,), Some(next,),)
            if previous.is_ascii_digit() && next.is_ascii_digit() && rules.is_datetime_separator('.',) =>
        {
            DotRole::Numeral
        }
        _ => DotRole::Significant,
    }
}

/// Removes ellipses and sentence dots and speaks significant dots.
pub(crate) fn disambiguate_dots(text: &str, rules: &LocaleRules,) -> String
{
    let chars: Vec<char,> = text.chars().collect();
    let mut rewritten = String::with_capacity(text.len(),);
    let mut index = 0;

    while let Some(&current,) = chars.get(index,) {
        if !is_dot(current,) {
            rewritten.push(current,);
            index += 1;
            continue;
        }

        match classify(&chars, index, rules,) {
            DotRole::Ellipsis {
                end,
            } => {
                let kept = rewritten.trim_end().len();
                rewritten.truncate(kept,);
                rewritten.push(' ',);
                index = end;
            }
            DotRole::Terminal | DotRole::Stray => index += 1,
            DotRole::Numeral => {
                rewritten.push('.',);
                index += 1;
            }
            DotRole::Significant => {
                rewritten.push(' ',);
                rewritten.push_str(rules.data().dot_word,);
                rewritten.push(' ',);
                index += 1;
            }
        }
    }

    rewritten
}

#[cfg(test)]
mod tests
{
    use super::disambiguate_dots;
    use crate::Locale;

    fn dots(text: &str, locale: Locale,) -> String
    {
        disambiguate_dots(text, locale.rules(),).split_whitespace().collect::<Vec<_,>>().join(" ",)
    }

    #[test]
    fn ellipses_are_removed_with_surrounding_space()
    {
        assert_eq!(dots("hi...there... you... rock ...", Locale::International), "hi there you rock");
        assert_eq!(dots("wait . . . what", Locale::International), "wait what");
        assert_eq!(dots("so…", Locale::International), "so");
    }

    #[test]
    fn sentence_and_abbreviation_dots_are_removed()
    {
        assert_eq!(dots("nice. really nice. etc.", Locale::International), "nice really nice etc");
    }

    #[test]
    fn significant_dots_use_locale_word()
    {
        assert_eq!(dots("visit github.com", Locale::International), "visit github dot com");
        assert_eq!(dots("besuche github.com", Locale::German), "besuche github punkt com");
    }

    #[test]
    fn numeral_dots_depend_on_locale()
    {
        assert_eq!(dots("31.12.2018", Locale::German), "31.12.2018");
        assert_eq!(dots("version 2.5", Locale::International), "version 2 dot 5");
    }

    #[test]
    fn leading_dots_are_dropped()
    {
        assert_eq!(dots("use .net", Locale::International), "use net");
    }

    #[test]
    fn ellipsis_takes_priority_over_terminal_dot()
    {
        let rewritten = disambiguate_dots("end..", Locale::International.rules(),);
        assert_eq!(rewritten, "end ");
    }

    #[test]
    fn reapplying_is_a_no_op()
    {
        for locale in Locale::ALL {
            let once = disambiguate_dots("a.b... c. 1.2.3", locale.rules(),);
            assert_eq!(disambiguate_dots(&once, locale.rules()), once);
        }
    }
}
