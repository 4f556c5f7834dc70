// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Currency and quantity recognition.
//!
//! Money is spoken before any numeral delimiter is touched because the
//! meaning of `.` and `,` inside an amount depends on the locale. Only a
//! numeral adjacent to a currency symbol is money; all other numerals merely
//! lose their grouping delimiters.

use std::ops::Range;

use crate::{
    locale::{LocaleData, LocaleRules, MoneyTemplate},
    scan,
};

/// Digits of a recognized amount with grouping delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq,)]
struct Amount
{
    integer:  String,
    fraction: Option<String,>,
}

impl Amount
{
    fn parse(raw: &str, data: &LocaleData,) -> Self
    {
        let (integer, fraction,) = match raw.split_once(data.decimal_separator,) {
            Some((integer, fraction,),) => (integer, Some(fraction,),),
            None => (raw, None,),
        };

        let integer: String = integer.chars().filter(char::is_ascii_digit,).collect();
        let trimmed = integer.trim_start_matches('0',);
        Self {
            integer:  if trimmed.is_empty() { "0".to_owned() } else { trimmed.to_owned() },
            fraction: fraction
                .map(|digits| digits.chars().filter(char::is_ascii_digit,).collect(),),
        }
    }

    fn is_one(digits: &str,) -> bool
    {
        digits.trim_start_matches('0',) == "1"
    }

    /// Fraction digits worth speaking; an all-zero fraction contributes
    /// nothing.
    fn spoken_fraction(&self,) -> Option<&str,>
    {
        self.fraction.as_deref().filter(|digits| digits.chars().any(|digit| digit != '0',),)
    }
}

/// A currency symbol bound to its amount, alive only while the text is
/// rewritten.
#[derive(Debug,)]
struct MoneyMatch
{
    amount:   Amount,
    currency: &'static MoneyTemplate,
    span:     Range<usize,>,
}

impl MoneyMatch
{
    fn speak(&self, data: &LocaleData,) -> String
    {
        let integer = &self.amount.integer;
        let count = match integer.parse::<usize>() {
            Ok(digit,) if integer.len() == 1 => data.number_words[digit],
            _ => integer.as_str(),
        };
        let major = if Amount::is_one(integer,) {
            self.currency.singular_major
        } else {
            self.currency.plural_major
        };

        let mut spoken = format!("{count} {major}");
        if let Some(fraction,) = self.amount.spoken_fraction() {
            let minor = if Amount::is_one(fraction,) {
                self.currency.singular_minor
            } else {
                self.currency.plural_minor
            };
            spoken.push_str(&format!(" {fraction} {minor}"),);
        }
        spoken
    }
}

/// Where a currency symbol is written relative to its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
enum SymbolSide
{
    Before,
    After,
}

/// Speaks money amounts and removes grouping delimiters from plain numerals.
pub(crate) fn speak_quantities(text: &str, rules: &LocaleRules,) -> String
{
    let prefixed = speak_money(text, SymbolSide::Before, rules,);
    let suffixed = speak_money(&prefixed, SymbolSide::After, rules,);
    let ungrouped = drop_grouping(&suffixed, rules,);
    speak_decimals(&ungrouped, rules.data(),)
}

/// Rewrites every money match for one symbol side.
///
/// Symbols written before the amount are resolved in an earlier pass than
/// symbols written after it, so in `100 $1` the symbol binds to `1`. A
/// symbol separated by whitespace from the following amount but directly
/// preceded by a numeral (`50 $ 60 $`) is left for the second pass, where it
/// binds to that preceding numeral.
fn speak_money(text: &str, side: SymbolSide, rules: &LocaleRules,) -> String
{
    let pattern = match side {
        SymbolSide::Before => rules.prefix_money(),
        SymbolSide::After => rules.suffix_money(),
    };
    let mut spoken = String::with_capacity(text.len(),);
    let mut copied = 0;

    for captures in pattern.captures_iter(text,) {
        let (Some(whole,), Some(symbol,), Some(amount,),) =
            (captures.get(0,), captures.name("symbol",), captures.name("amount",),)
        else {
            continue;
        };
        let Some(currency,) = symbol.as_str().chars().next().and_then(|value| rules.currency(value,),)
        else {
            continue;
        };

        let span = match side {
            SymbolSide::Before => {
                let spaced = amount.start() > symbol.end();
                if spaced && follows_numeral(&text[copied..symbol.start()],) {
                    continue;
                }
                whole.range()
            }
            SymbolSide::After => {
                numeral_start(text, copied, amount.start(), rules.data(),)..whole.end()
            }
        };
        let raw = match side {
            SymbolSide::Before => amount.as_str(),
            SymbolSide::After => &text[span.start..amount.end()],
        };

        let money = MoneyMatch {
            amount: Amount::parse(raw, rules.data(),),
            currency,
            span,
        };
        spoken.push_str(&text[copied..money.span.start],);
        spoken.push(' ',);
        spoken.push_str(&money.speak(rules.data(),),);
        spoken.push(' ',);
        copied = money.span.end;
    }

    spoken.push_str(&text[copied..],);
    spoken
}

/// Whether `head` ends with a digit, optionally followed by one whitespace
/// character.
fn follows_numeral(head: &str,) -> bool
{
    let head = head.strip_suffix(char::is_whitespace,).unwrap_or(head,);
    head.ends_with(|value: char| value.is_ascii_digit(),)
}

/// Moves `start` back over digits and separators glued to the amount, never
/// past `floor`, so a numeral the pattern only matched partially
/// (`12345,000$`) is spoken whole instead of losing its symbol.
fn numeral_start(text: &str, floor: usize, start: usize, data: &LocaleData,) -> usize
{
    let mut start = start;
    while let Some(previous,) = text[floor..start].chars().next_back() {
        let separator =
            previous == data.thousands_separator || previous == data.decimal_separator;
        let digit_before = text[floor..start - previous.len_utf8()]
            .chars()
            .next_back()
            .is_some_and(|value| value.is_ascii_digit(),);
        if previous.is_ascii_digit() || (separator && digit_before) {
            start -= previous.len_utf8();
        } else {
            break;
        }
    }
    start
}

/// Drops thousands separators from numerals whose groups are exactly three
/// digits wide. Numerals glued to further digits (dates, versions) are left
/// for later stages.
fn drop_grouping(text: &str, rules: &LocaleRules,) -> String
{
    let separator = rules.data().thousands_separator;
    let mut ungrouped = String::with_capacity(text.len(),);
    let mut copied = 0;

    for numeral in rules.grouped_numeral().find_iter(text,) {
        let (before, after,) = scan::neighbours(text, numeral.start(), numeral.end(),);
        let continues = after.is_some_and(|value| value.is_ascii_digit(),)
            || (after == Some(separator,)
                && text[numeral.end() + separator.len_utf8()..]
                    .starts_with(|value: char| value.is_ascii_digit(),));
        if before.is_some_and(|value| value.is_ascii_digit(),) || continues {
            continue;
        }

        ungrouped.push_str(&text[copied..numeral.start()],);
        ungrouped.extend(numeral.as_str().chars().filter(|value| *value != separator,),);
        copied = numeral.end();
    }

    ungrouped.push_str(&text[copied..],);
    ungrouped
}

/// Speaks a decimal separator between digits when it is not `.`; a `.`
/// decimal is left to dot disambiguation.
fn speak_decimals(text: &str, data: &LocaleData,) -> String
{
    if data.decimal_separator == '.' {
        return text.to_owned();
    }

    scan::replace_between(text, data.decimal_separator, scan::digits_around, |out| {
        out.push(' ',);
        out.push_str(data.decimal_word,);
        out.push(' ',);
    },)
}
