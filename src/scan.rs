// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Neighbour lookups shared by the context-sensitive stages.

/// Returns the characters immediately before and after the span
/// `start..end` of `text`.
pub(crate) fn neighbours(text: &str, start: usize, end: usize,) -> (Option<char,>, Option<char,>,)
{
    (text[..start].chars().next_back(), text[end..].chars().next(),)
}

/// Rewrites every occurrence of `target` whose neighbours satisfy `between`,
/// substituting the output of `replacement`. Characters that do not qualify
/// are copied unchanged.
pub(crate) fn replace_between<P, R,>(text: &str, target: char, between: P, replacement: R,) -> String
where
    P: Fn(Option<char,>, Option<char,>,) -> bool,
    R: Fn(&mut String,),
{
    let mut rewritten = String::with_capacity(text.len(),);
    for (index, candidate,) in text.char_indices() {
        if candidate == target {
            let (before, after,) = neighbours(text, index, index + candidate.len_utf8(),);
            if between(before, after,) {
                replacement(&mut rewritten,);
                continue;
            }
        }
        rewritten.push(candidate,);
    }
    rewritten
}

/// Whether both neighbours exist and are ASCII digits.
pub(crate) fn digits_around(before: Option<char,>, after: Option<char,>,) -> bool
{
    before.is_some_and(|value| value.is_ascii_digit(),)
        && after.is_some_and(|value| value.is_ascii_digit(),)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn neighbours_handle_text_edges()
    {
        assert_eq!(neighbours("a.b", 1, 2,), (Some('a'), Some('b')));
        assert_eq!(neighbours(".", 0, 1,), (None, None));
    }

    #[test]
    fn neighbours_respect_multibyte_characters()
    {
        let text = "é/ü";
        let slash = text.find('/',).expect("slash present",);
        assert_eq!(neighbours(text, slash, slash + 1,), (Some('é'), Some('ü')));
    }

    #[test]
    fn replace_between_only_touches_qualifying_targets()
    {
        let rewritten =
            replace_between("1:2 a:b 3:", ':', digits_around, |out| out.push('-',),);
        assert_eq!(rewritten, "1-2 a:b 3:");
    }

    #[test]
    fn replace_between_sees_original_neighbours_for_chains()
    {
        let rewritten = replace_between("31/12/2018", '/', digits_around, |out| out.push('-',),);
        assert_eq!(rewritten, "31-12-2018");
    }
}
