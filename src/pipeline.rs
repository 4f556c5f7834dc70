// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Ordered rule pipeline turning free text into slug-ready words.
//!
//! Stages run strictly in declaration order and each one is a pure function
//! of the previous output and the locale. Money is spoken before numeral
//! delimiters are touched; dots are classified before datetime separators
//! are rewritten.

use tracing::trace;

use crate::{dots, locale::LocaleRules, logogram, money, readable, separator, transliterate};

/// A named, pure rewriting step.
struct Stage
{
    name:  &'static str,
    apply: fn(&str, &LocaleRules,) -> String,
}

const STAGES: [Stage; 6] = [
    Stage {
        name: "diacritics", apply: transliterate::strip_diacritics,
    },
    Stage {
        name: "quantities", apply: money::speak_quantities,
    },
    Stage {
        name: "dots", apply: dots::disambiguate_dots,
    },
    Stage {
        name: "logograms", apply: logogram::translate_logograms,
    },
    Stage {
        name: "separators", apply: separator::normalize_separators,
    },
    Stage {
        name: "unreadable", apply: |text, _| readable::drop_unreadable(text,),
    },
];

/// Runs every stage over `text` with the given locale rules.
pub(crate) fn run(text: &str, rules: &LocaleRules,) -> String
{
    let mut current = text.to_owned();
    for stage in &STAGES {
        current = (stage.apply)(&current, rules,);
        trace!("{} stage for {} produced {:?}", stage.name, rules.locale(), current);
    }
    current
}

#[cfg(test)]
mod tests
{
    use super::{STAGES, run};
    use crate::Locale;

    #[test]
    fn stages_run_in_documented_order()
    {
        let names: Vec<&str,> = STAGES.iter().map(|stage| stage.name,).collect();
        assert_eq!(
            names,
            ["diacritics", "quantities", "dots", "logograms", "separators", "unreadable"]
        );
    }

    #[test]
    fn output_only_contains_words_and_separators()
    {
        let output = run("Ünïcödé $5 & co. – 日本 🙂", Locale::International.rules(),);
        assert!(output.chars().all(|value| value.is_ascii_alphanumeric() || value == ' ' || value == '-'));
    }

    #[test]
    fn every_stage_is_idempotent_on_its_own_output()
    {
        let samples = ["Frère $5,000.50 github.com #tag 31/12 it's", "5.000,50 $ 31.12.2018 heute/morgen",];
        for locale in Locale::ALL {
            let rules = locale.rules();
            for sample in samples {
                let mut current = sample.to_owned();
                for stage in &STAGES {
                    let once = (stage.apply)(&current, rules,);
                    assert_eq!((stage.apply)(&once, rules,), once, "stage {} on {:?}", stage.name, current);
                    current = once;
                }
            }
        }
    }
}
