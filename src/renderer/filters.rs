use crate::constants::{params, DEFAULT_SEPARATOR, DEFAULT_UPPERCASE_FIRST_LETTER};
use crate::inflection::{camelize, parameterize};
use minijinja::{value::Kwargs, Error, ErrorKind};

// The single-argument operations are registered as-is.
pub use crate::inflection::{
    dasherize, humanize, ordinal, ordinalize, pluralize, singularize, tableize,
    titleize, transliterate, underscore,
};

/// `camelize` filter.
///
/// Accepts the flag either positionally or as a keyword:
/// `{{ name | camelize(false) }}` or
/// `{{ name | camelize(uppercase_first_letter=false) }}`. Defaults to `true`.
pub fn camelize_filter(
    value: &str,
    uppercase_first_letter: Option<bool>,
    kwargs: Kwargs,
) -> Result<String, Error> {
    let keyword: Option<bool> = kwargs.get(params::UPPERCASE_FIRST_LETTER)?;
    kwargs.assert_all_used()?;
    let uppercase_first_letter = positional_or_keyword(
        "camelize",
        params::UPPERCASE_FIRST_LETTER,
        uppercase_first_letter,
        keyword,
    )?
    .unwrap_or(DEFAULT_UPPERCASE_FIRST_LETTER);
    Ok(camelize(value, uppercase_first_letter))
}

/// `parameterize` filter.
///
/// `{{ title | parameterize }}`, `{{ title | parameterize('_') }}` or
/// `{{ title | parameterize(separator='_') }}`. Defaults to `-`.
pub fn parameterize_filter(
    value: &str,
    separator: Option<&str>,
    kwargs: Kwargs,
) -> Result<String, Error> {
    let keyword: Option<&str> = kwargs.get(params::SEPARATOR)?;
    kwargs.assert_all_used()?;
    let separator =
        positional_or_keyword("parameterize", params::SEPARATOR, separator, keyword)?
            .unwrap_or(DEFAULT_SEPARATOR);
    parameterize(value, separator).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "separator cannot be used in a slug")
            .with_source(err)
    })
}

fn positional_or_keyword<T>(
    filter: &str,
    param: &str,
    positional: Option<T>,
    keyword: Option<T>,
) -> Result<Option<T>, Error> {
    match (positional, keyword) {
        (Some(_), Some(_)) => Err(Error::new(
            ErrorKind::TooManyArguments,
            format!("{filter}() got multiple values for argument '{param}'"),
        )),
        (positional, keyword) => Ok(positional.or(keyword)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_or_keyword_prefers_whichever_is_set() {
        assert_eq!(positional_or_keyword("f", "p", Some(1), None).unwrap(), Some(1));
        assert_eq!(positional_or_keyword("f", "p", None, Some(2)).unwrap(), Some(2));
        assert_eq!(positional_or_keyword::<i32>("f", "p", None, None).unwrap(), None);
    }

    #[test]
    fn test_positional_or_keyword_rejects_both() {
        let err = positional_or_keyword("camelize", "flag", Some(true), Some(false))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyArguments);
        assert!(err.to_string().contains("multiple values for argument 'flag'"));
    }
}
