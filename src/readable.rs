// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Last line of defence: anything that is not an ASCII letter, digit or
//! separator is dropped, whatever script or plane it comes from.

/// Drops every character outside `[A-Za-z0-9 -]`.
pub(crate) fn drop_unreadable(text: &str,) -> String
{
    text.chars()
        .filter(|candidate| candidate.is_ascii_alphanumeric() || matches!(*candidate, ' ' | '-'),)
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::drop_unreadable;

    #[test]
    fn control_characters_disappear()
    {
        assert_eq!(drop_unreadable("hack\u{0}er\u{14}man"), "hackerman");
    }

    #[test]
    fn foreign_scripts_emoji_and_private_use_disappear()
    {
        assert_eq!(drop_unreadable("a日本b😀c\u{e000}d\u{fdd0}e\u{10ffff}"), "abcde");
    }

    #[test]
    fn ascii_punctuation_is_dropped_but_separators_survive()
    {
        assert_eq!(drop_unreadable("Hi there! (ok) - fine?"), "Hi there ok - fine");
    }

    #[test]
    fn non_ascii_digits_are_not_readable()
    {
        assert_eq!(drop_unreadable("x²٣"), "x");
    }
}
