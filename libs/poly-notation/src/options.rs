//! # Factory Options
//!
//! Declared option sets and getopt-style argument parsing for factories.
//!
//! ## Rules
//!
//! - `-n 3` and `-n3` give option `n` the value `3`
//! - boolean flags group: `-ab` sets `a` and `b`
//! - arguments not starting with `-` are positional, as is everything after
//!   `--`; `-` alone and negative numbers (`-2`) are positional too
//! - an undeclared flag or a missing value rejects the whole list
//!
//! ## Example
//!
//! ```rust
//! use poly_notation::{OptionSpec, ParsedArgs};
//!
//! let specs = [OptionSpec::value('n'), OptionSpec::switch('v')];
//! let args: Vec<String> = ["-vn3", "red"].iter().map(|s| s.to_string()).collect();
//! let parsed = ParsedArgs::parse(&specs, &args).unwrap();
//! assert_eq!(parsed.integer('n'), Some(3));
//! assert!(parsed.flag('v'));
//! assert_eq!(parsed.positional(), &["red".to_string()]);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

// =============================================================================
// OPTION SPEC
// =============================================================================

/// One declared option of a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Single-character flag.
    pub flag: char,
    /// Whether the flag consumes a value.
    pub takes_value: bool,
}

impl OptionSpec {
    /// An option that takes a value (`-n 3`).
    pub const fn value(flag: char) -> Self {
        Self {
            flag,
            takes_value: true,
        }
    }

    /// A boolean switch (`-v`).
    pub const fn switch(flag: char) -> Self {
        Self {
            flag,
            takes_value: false,
        }
    }
}

// =============================================================================
// PARSED ARGUMENTS
// =============================================================================

/// Arguments parsed against an option set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    values: BTreeMap<char, String>,
    flags: BTreeSet<char>,
    positional: Vec<String>,
}

impl ParsedArgs {
    /// Parses `args` against `specs`.
    ///
    /// Returns `None` for an undeclared flag or a value option without a
    /// value. A repeated value option keeps its last value.
    pub fn parse(specs: &[OptionSpec], args: &[String]) -> Option<Self> {
        let mut parsed = Self::default();
        let mut args = args.iter();
        let mut options_done = false;

        while let Some(arg) = args.next() {
            if options_done || !is_option(arg) {
                parsed.positional.push(arg.clone());
                continue;
            }
            if arg == "--" {
                options_done = true;
                continue;
            }
            let body = &arg[1..];
            for (i, c) in body.char_indices() {
                let spec = specs.iter().find(|s| s.flag == c)?;
                if !spec.takes_value {
                    parsed.flags.insert(c);
                    continue;
                }
                let attached = &body[i + c.len_utf8()..];
                let value = if attached.is_empty() {
                    args.next()?.clone()
                } else {
                    attached.to_string()
                };
                parsed.values.insert(c, value);
                break;
            }
        }
        Some(parsed)
    }

    /// Raw value of a value option.
    pub fn value(&self, flag: char) -> Option<&str> {
        self.values.get(&flag).map(String::as_str)
    }

    /// True if a value option was given.
    pub fn has(&self, flag: char) -> bool {
        self.values.contains_key(&flag)
    }

    /// Value option parsed as a float; `None` if absent or not a number.
    pub fn number(&self, flag: char) -> Option<f64> {
        self.value(flag)?.parse().ok()
    }

    /// Value option parsed as an integer; `None` if absent or not an integer.
    pub fn integer(&self, flag: char) -> Option<i64> {
        self.value(flag)?.parse().ok()
    }

    /// Float value, `default` when absent, `None` when present but invalid.
    pub fn number_or(&self, flag: char, default: f64) -> Option<f64> {
        if self.has(flag) {
            self.number(flag)
        } else {
            Some(default)
        }
    }

    /// True if a boolean switch was given.
    pub fn flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    /// Positional arguments in order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }
}

/// True for `-x...` and `--`, false for `-`, `-2`, `-.5` and plain text.
fn is_option(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-')
        && chars
            .next()
            .is_some_and(|c| !c.is_ascii_digit() && c != '.')
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    const SPECS: [OptionSpec; 4] = [
        OptionSpec::value('n'),
        OptionSpec::value('x'),
        OptionSpec::switch('a'),
        OptionSpec::switch('b'),
    ];

    #[test]
    fn test_separate_and_attached_values() {
        let parsed = ParsedArgs::parse(&SPECS, &strings(&["-n", "3", "-x2.5"])).unwrap();
        assert_eq!(parsed.integer('n'), Some(3));
        assert_eq!(parsed.number('x'), Some(2.5));
        assert_eq!(parsed.value('x'), Some("2.5"));
    }

    #[test]
    fn test_grouped_switches_and_value() {
        let parsed = ParsedArgs::parse(&SPECS, &strings(&["-ab", "-bn", "7"])).unwrap();
        assert!(parsed.flag('a'));
        assert!(parsed.flag('b'));
        assert_eq!(parsed.integer('n'), Some(7));
    }

    #[test]
    fn test_negative_values_and_positionals() {
        let parsed =
            ParsedArgs::parse(&SPECS, &strings(&["-x", "-4", "-2", "-", "--", "-a"])).unwrap();
        assert_eq!(parsed.number('x'), Some(-4.0));
        assert_eq!(parsed.positional(), &strings(&["-2", "-", "-a"])[..]);
        assert!(!parsed.flag('a'));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(ParsedArgs::parse(&SPECS, &strings(&["-q"])), None);
        assert_eq!(ParsedArgs::parse(&SPECS, &strings(&["-n"])), None);
        assert_eq!(ParsedArgs::parse(&[], &strings(&["-n", "3"])), None);
    }

    #[test]
    fn test_last_value_wins_and_defaults() {
        let parsed = ParsedArgs::parse(&SPECS, &strings(&["-n1", "-n", "2"])).unwrap();
        assert_eq!(parsed.integer('n'), Some(2));
        assert_eq!(parsed.number_or('x', 1.5), Some(1.5));
        let bad = ParsedArgs::parse(&SPECS, &strings(&["-xoops"])).unwrap();
        assert_eq!(bad.number_or('x', 1.5), None);
        assert_eq!(bad.integer('n'), None);
    }
}
