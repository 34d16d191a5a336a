//! Identifier normalization for generated Python code.
//!
//! API names are camelCase (`setOptionMaxDepth`, `HTTPSessions`) and may
//! contain periods or collide with Python keywords. The normalizer turns
//! them into lower_case_with_underscores identifiers:
//!
//! 1. reserved words are replaced using a [`NameSubstitutions`] table;
//! 2. word boundaries get an underscore and the result is lower-cased;
//! 3. every `.` is removed.
//!
//! # Examples
//!
//! ```
//! use zapgen_codegen::naming::IdentifierNormalizer;
//!
//! let normalizer = IdentifierNormalizer::python();
//!
//! assert_eq!(normalizer.function_name("setOptionMaxDepth"), "set_option_max_depth");
//! assert_eq!(normalizer.function_name("HTTPSessions"), "http_sessions");
//! assert_eq!(normalizer.function_name("break"), "brk");
//! assert_eq!(normalizer.file_name("ajaxSpider"), "ajax_spider.py");
//! ```

use std::collections::BTreeMap;

/// Immutable mapping from reserved words to safe replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSubstitutions {
    map: BTreeMap<String, String>,
}

impl NameSubstitutions {
    /// Builds a table from `(reserved, replacement)` pairs.
    #[must_use]
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Table for Python output.
    #[must_use]
    pub fn python() -> Self {
        Self::new([("break", "brk"), ("continue", "cont")])
    }

    /// Returns the replacement for `name`, or `name` unchanged.
    #[must_use]
    pub fn apply<'a>(&'a self, name: &'a str) -> &'a str {
        self.map.get(name).map_or(name, String::as_str)
    }

    /// Returns `true` if `name` is a reserved word in this table.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Iterates over `(reserved, replacement)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for NameSubstitutions {
    fn default() -> Self {
        Self::python()
    }
}

/// Turns API names into output-language identifiers.
#[derive(Debug, Clone, Default)]
pub struct IdentifierNormalizer {
    substitutions: NameSubstitutions,
}

impl IdentifierNormalizer {
    /// Creates a normalizer over the given substitution table.
    #[must_use]
    pub const fn new(substitutions: NameSubstitutions) -> Self {
        Self { substitutions }
    }

    /// Normalizer with the Python reserved-word table.
    #[must_use]
    pub fn python() -> Self {
        Self::new(NameSubstitutions::python())
    }

    /// The substitution table in use.
    #[must_use]
    pub const fn substitutions(&self) -> &NameSubstitutions {
        &self.substitutions
    }

    /// Replaces a reserved word with its safe form.
    #[must_use]
    pub fn safe_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.substitutions.apply(name)
    }

    /// Converts camelCase to lower case with underscores.
    ///
    /// An underscore goes between two characters when:
    /// - an uppercase run meets an uppercase letter followed by a
    ///   lowercase one (`HTTPRequest` → `HTTP_Request`);
    /// - a non-uppercase character is followed by an uppercase one;
    /// - a letter is followed by a non-letter.
    ///
    /// Only ASCII letters count as letters. The reserved-word table is
    /// applied first.
    ///
    /// # Examples
    ///
    /// ```
    /// use zapgen_codegen::naming::IdentifierNormalizer;
    ///
    /// let normalizer = IdentifierNormalizer::python();
    /// assert_eq!(normalizer.camel_case_to_lc_underscores("TestCase"), "test_case");
    /// assert_eq!(normalizer.camel_case_to_lc_underscores("HTTPRequest"), "http_request");
    /// assert_eq!(normalizer.camel_case_to_lc_underscores("scan2"), "scan_2");
    /// ```
    #[must_use]
    pub fn camel_case_to_lc_underscores(&self, name: &str) -> String {
        let chars: Vec<char> = self.safe_name(name).chars().collect();
        let mut out = String::with_capacity(chars.len() + chars.len() / 2);

        for (i, &cur) in chars.iter().enumerate() {
            if i > 0 {
                let prev = chars[i - 1];
                let next = chars.get(i + 1).copied();
                if is_word_boundary(prev, cur, next) {
                    out.push('_');
                }
            }
            out.push(cur);
        }

        out.to_lowercase()
    }

    /// Full normalization for callable names.
    #[must_use]
    pub fn function_name(&self, name: &str) -> String {
        remove_full_stops(&self.camel_case_to_lc_underscores(self.safe_name(name)))
    }

    /// Output file name for a component prefix.
    #[must_use]
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}.py", self.function_name(prefix))
    }

    /// Class name for a component prefix.
    ///
    /// Keeps the prefix's case; only reserved words and periods are
    /// handled.
    #[must_use]
    pub fn class_name(&self, prefix: &str) -> String {
        remove_full_stops(self.safe_name(prefix))
    }
}

fn is_word_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    let acronym_end = prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && next.is_some_and(|c| c.is_ascii_lowercase());
    let lower_to_upper = !prev.is_ascii_uppercase() && cur.is_ascii_uppercase();
    let letter_to_other = prev.is_ascii_alphabetic() && !cur.is_ascii_alphabetic();

    acronym_end || lower_to_upper || letter_to_other
}

fn remove_full_stops(s: &str) -> String {
    s.replace('.', "")
}
