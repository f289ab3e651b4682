use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static DICTIONARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Dictionary\s*<(.*)>$").expect("valid regex"));

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s<>\[\]|]+$").expect("valid regex"));

/// Parsed form of a property's type expression.
///
/// Grammar, tried in this order:
/// - `Dictionary<X>` → [`TypeExpr::Map`]
/// - `X[]` → [`TypeExpr::Array`]
/// - `A|B|...` → [`TypeExpr::Union`] (split outside angle brackets)
/// - anything else is a bare name, either a primitive or a declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(String),
    Array(Box<TypeExpr>),
    Map(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    pub fn parse(expression: &str) -> Result<Self> {
        parse_part(expression.trim(), expression)
    }

    /// Every bare name in the expression, left to right.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_identifiers(&mut names);
        names
    }

    fn collect_identifiers<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeExpr::Named(name) => names.push(name),
            TypeExpr::Array(inner) | TypeExpr::Map(inner) => inner.collect_identifiers(names),
            TypeExpr::Union(alternatives) => {
                for alt in alternatives {
                    alt.collect_identifiers(names);
                }
            }
        }
    }
}

fn malformed(expression: &str, reason: impl Into<String>) -> Error {
    Error::MalformedTypeExpression {
        expression: expression.to_string(),
        reason: reason.into(),
    }
}

fn parse_part(part: &str, expression: &str) -> Result<TypeExpr> {
    if part.is_empty() {
        return Err(malformed(expression, "empty type"));
    }

    if let Some(argument) = dictionary_argument(part) {
        return Ok(TypeExpr::Map(Box::new(parse_part(argument.trim(), expression)?)));
    }

    if let Some(items) = part.strip_suffix("[]") {
        return Ok(TypeExpr::Array(Box::new(parse_part(items.trim(), expression)?)));
    }

    let alternatives = split_alternatives(part, expression)?;
    if alternatives.len() > 1 {
        return alternatives
            .into_iter()
            .map(|alt| parse_part(alt.trim(), expression))
            .collect::<Result<Vec<_>>>()
            .map(TypeExpr::Union);
    }

    if !IDENTIFIER.is_match(part) {
        return Err(malformed(expression, format!("`{part}` is not a type name")));
    }
    Ok(TypeExpr::Named(part.to_string()))
}

/// `X` for `Dictionary<X>`, but only when the opening `<` closes at the very end.
fn dictionary_argument(part: &str) -> Option<&str> {
    let argument = DICTIONARY.captures(part)?.get(1)?.as_str();
    let mut depth = 0i32;
    for ch in argument.chars() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(argument)
}

fn split_alternatives<'a>(part: &'a str, expression: &str) -> Result<Vec<&'a str>> {
    let mut alternatives = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in part.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth -= 1,
            '|' if depth == 0 => {
                alternatives.push(&part[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        if depth < 0 {
            return Err(malformed(expression, "unbalanced `>`"));
        }
    }
    if depth != 0 {
        return Err(malformed(expression, "unbalanced `<`"));
    }
    alternatives.push(&part[start..]);
    Ok(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeExpr {
        TypeExpr::Named(name.to_string())
    }

    #[test]
    fn bare_names() {
        assert_eq!(TypeExpr::parse("string").unwrap(), named("string"));
        assert_eq!(TypeExpr::parse(" Action.OpenUrl ").unwrap(), named("Action.OpenUrl"));
    }

    #[test]
    fn shorthand_forms() {
        assert_eq!(
            TypeExpr::parse("Action[]").unwrap(),
            TypeExpr::Array(Box::new(named("Action")))
        );
        assert_eq!(
            TypeExpr::parse("Dictionary<Action.OpenUrl>").unwrap(),
            TypeExpr::Map(Box::new(named("Action.OpenUrl")))
        );
        assert_eq!(
            TypeExpr::parse("uri | BackgroundImage").unwrap(),
            TypeExpr::Union(vec![named("uri"), named("BackgroundImage")])
        );
    }

    #[test]
    fn map_takes_precedence_over_union_inside_it() {
        assert_eq!(
            TypeExpr::parse("Dictionary<string|number>").unwrap(),
            TypeExpr::Map(Box::new(TypeExpr::Union(vec![named("string"), named("number")])))
        );
    }

    #[test]
    fn union_of_maps_is_not_one_map() {
        assert_eq!(
            TypeExpr::parse("Dictionary<string>|Dictionary<number>").unwrap(),
            TypeExpr::Union(vec![
                TypeExpr::Map(Box::new(named("string"))),
                TypeExpr::Map(Box::new(named("number"))),
            ])
        );
    }

    #[test]
    fn array_suffix_binds_loosest() {
        assert_eq!(
            TypeExpr::parse("string|number[]").unwrap(),
            TypeExpr::Array(Box::new(TypeExpr::Union(vec![named("string"), named("number")])))
        );
        assert_eq!(
            TypeExpr::parse("Dictionary<string>[]").unwrap(),
            TypeExpr::Array(Box::new(TypeExpr::Map(Box::new(named("string")))))
        );
    }

    #[test]
    fn identifiers_in_order() {
        let expr = TypeExpr::parse("uri|Dictionary<Image[]>|Action").unwrap();
        assert_eq!(expr.identifiers(), ["uri", "Image", "Action"]);
    }

    #[test]
    fn malformed_expressions() {
        for bad in ["", "a||b", "Dictionary<>", "List<string>", "a>|b", "[]", "Dictionary<a"] {
            assert!(
                matches!(TypeExpr::parse(bad), Err(Error::MalformedTypeExpression { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
