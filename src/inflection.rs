//! String inflection operations exposed as template filters.
//!
//! The plural/singular rule tables come from `cruet`, transliteration from
//! `deunicode`. Case rewriting is done with `regex` substitutions so that
//! digits stay attached to the word before them and existing capitals
//! survive camelizing.

use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

pub use cruet::string::{pluralize::to_plural, singularize::to_singular};

static CAMELIZE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|_)(.)").expect("valid camelize pattern"));
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid acronym pattern"));
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid word pattern"));
static ID_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_id$").expect("valid id suffix pattern"));
static ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z\d]+").expect("valid alnum pattern"));
static FIRST_WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w").expect("valid first char pattern"));
static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("valid letter run pattern"));
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b('?\w)").expect("valid word start pattern"));
static UNWANTED_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9\-_]+").expect("valid slug pattern"));
static TRAILING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+$").expect("valid trailing word pattern"));

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Applies a word-level inflection to the last run of word characters only,
/// leaving any leading text (`x's_y`, `big car`) untouched.
fn inflect_last_word(text: &str, inflect: fn(&str) -> String) -> String {
    match TRAILING_WORD.find(text) {
        Some(word) => format!("{}{}", &text[..word.start()], inflect(word.as_str())),
        None => text.to_string(),
    }
}

/// Converts an underscored identifier to camel case.
///
/// With `uppercase_first_letter` set the result is upper camel case
/// (`device_type` → `DeviceType`), otherwise the first letter is lower-cased
/// (`device_type` → `deviceType`). Capitals already present are kept:
/// `HTTPServer` stays `HTTPServer`.
pub fn camelize(text: &str, uppercase_first_letter: bool) -> String {
    let camelized = CAMELIZE_BOUNDARY
        .replace_all(text, |caps: &Captures| caps[1].to_uppercase())
        .into_owned();
    if uppercase_first_letter {
        return camelized;
    }
    match text.chars().next() {
        Some(first) => first
            .to_lowercase()
            .chain(camelized.chars().skip(1))
            .collect(),
        None => camelized,
    }
}

/// Replaces underscores with dashes.
pub fn dasherize(text: &str) -> String {
    text.replace('_', "-")
}

/// Turns a database-style identifier into a human readable phrase.
///
/// A trailing `_id` is dropped, underscores become spaces and only the first
/// character is capitalized: `author_id` → `Author`,
/// `employee_salary` → `Employee salary`.
pub fn humanize(text: &str) -> String {
    let text = ID_SUFFIX.replace(text, "").replace('_', " ");
    let lowered = ALNUM_RUN.replace_all(&text, |caps: &Captures| caps[0].to_lowercase());
    FIRST_WORD_CHAR
        .replace(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Returns the English ordinal suffix for `number`.
///
/// The sign is ignored, so `-1` yields `st` like `1`.
pub fn ordinal(number: i64) -> &'static str {
    let number = number.unsigned_abs();
    if (11..=13).contains(&(number % 100)) {
        return "th";
    }
    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Appends the ordinal suffix to `number`: `21` → `21st`.
pub fn ordinalize(number: i64) -> String {
    format!("{number}{}", ordinal(number))
}

/// Converts text into a lowercase slug usable in URLs.
///
/// Non-ASCII characters are transliterated first. Every run of characters
/// other than ASCII letters, digits, `-` and `_` becomes one `separator`.
/// When the separator is not empty, repeated separators are collapsed and
/// one separator is trimmed from each end.
///
/// # Errors
/// Fails only if the patterns built around `separator` exceed the regex
/// size limits.
pub fn parameterize(text: &str, separator: &str) -> Result<String, regex::Error> {
    let ascii = transliterate(text);
    let mut slug = UNWANTED_SLUG_CHARS
        .replace_all(&ascii, NoExpand(separator))
        .into_owned();

    if !separator.is_empty() {
        let escaped = regex::escape(separator);
        let repeated = Regex::new(&format!("(?:{escaped}){{2,}}"))?;
        let at_edges = Regex::new(&format!("^(?:{escaped})|(?:{escaped})$"))?;
        slug = repeated.replace_all(&slug, NoExpand(separator)).into_owned();
        slug = at_edges.replace_all(&slug, "").into_owned();
    }

    Ok(slug.to_lowercase())
}

/// Returns the plural form of an English noun.
///
/// Only the trailing word is inflected: `big car` → `big cars`.
pub fn pluralize(text: &str) -> String {
    inflect_last_word(text, to_plural)
}

/// Returns the singular form of an English noun.
pub fn singularize(text: &str) -> String {
    inflect_last_word(text, to_singular)
}

/// Builds a table name from a type name: `UserAccount` → `user_accounts`.
pub fn tableize(text: &str) -> String {
    pluralize(&underscore(text))
}

/// Capitalizes every word of a humanized identifier:
/// `api_responses` → `Api Responses`, `x's_y` → `X's Y`.
pub fn titleize(text: &str) -> String {
    let humanized = humanize(&underscore(text));
    let titled = LETTER_RUN.replace_all(&humanized, |caps: &Captures| capitalize(&caps[0]));
    WORD_START
        .replace_all(&titled, |caps: &Captures| capitalize(&caps[1]))
        .into_owned()
}

/// Replaces non-ASCII characters with their closest ASCII equivalents.
pub fn transliterate(text: &str) -> String {
    deunicode::deunicode(text)
}

/// Converts a camel case or dashed identifier to lowercase underscored form.
///
/// Digits stay with the word before them: `User2Name` → `user2_name`.
pub fn underscore(text: &str) -> String {
    let text = ACRONYM_BOUNDARY.replace_all(text, "${1}_${2}");
    let text = WORD_BOUNDARY.replace_all(&text, "${1}_${2}");
    text.replace('-', "_").to_lowercase()
}
