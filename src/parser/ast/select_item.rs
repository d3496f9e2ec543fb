use std::fmt;

use crate::parser::{ast::{IdentifierParser, ScalarExpr}, ParseError, QueryParser};

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Alias {
    /// `AS *`: spread the value's keys into columns.
    Star,
    Name(String),
}

/// One entry of a select list: `expr [AS alias]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectItem {
    pub expression: ScalarExpr,
    pub alias: Option<Alias>,
}

impl SelectItem {
    pub fn parse(parser: &mut QueryParser) -> Result<SelectItem, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        let expression = ScalarExpr::parse(parser, true)?;

        parser.next_non_whitespace();
        if !parser.comparers.alias.compare(parser) {
            return Ok(SelectItem { expression, alias: None });
        }

        parser.jump(parser.comparers.alias.length);
        parser.next_non_whitespace();

        let alias = if parser.current() == '*' {
            parser.next();
            Alias::Star
        } else {
            Alias::Name(IdentifierParser::parse(parser)?.name)
        };

        if expression == ScalarExpr::WildCard && alias != Alias::Star {
            return ParseError::new("Wildcard can't be renamed", pivot, parser).err();
        }

        Ok(SelectItem { expression, alias: Some(alias) })
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            None => write!(f, "{}", self.expression.to_sql()),
            Some(alias) => write!(f, "{} AS {:?}", self.expression.to_sql(), alias),
        }
    }
}

impl fmt::Debug for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alias::Star => write!(f, "*"),
            Alias::Name(name) => write!(f, "\"{}\"", name.replace('"', "\"\"")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{Alias, ColumnIdentifier, ScalarExpr, SelectItem}, QueryParser};

    #[test]
    pub fn test_select_item_column() {
        let mut parser = QueryParser::new("pwet FROM x");

        let result = SelectItem::parse(&mut parser).expect("Failed to parse select item");

        assert_eq!(result.expression, ScalarExpr::Column(ColumnIdentifier::bare("pwet")));
        assert_eq!(result.alias, None);
    }

    #[test]
    pub fn test_select_item_with_alias() {
        let mut parser = QueryParser::new("pwet as other");

        let result = SelectItem::parse(&mut parser).expect("Failed to parse select item");

        assert_eq!(result.alias, Some(Alias::Name("other".into())));
    }

    #[test]
    pub fn test_select_item_with_quoted_empty_alias() {
        let mut parser = QueryParser::new("pwet AS \"\"");

        let result = SelectItem::parse(&mut parser).expect("Failed to parse select item");

        assert_eq!(result.alias, Some(Alias::Name("".into())));
    }

    #[test]
    pub fn test_select_item_object_expansion() {
        let mut parser = QueryParser::new(r#"parse_json('{"": 5, "pwet":10}') AS *"#);

        let result = SelectItem::parse(&mut parser).expect("Failed to parse select item");

        match result.expression {
            ScalarExpr::Function(function) => assert_eq!(function.name, "parse_json"),
            _ => panic!(),
        }
        assert_eq!(result.alias, Some(Alias::Star));
        assert!(parser.eof());
    }

    #[test]
    pub fn test_select_item_star_as_star() {
        let mut parser = QueryParser::new("* AS *");

        let result = SelectItem::parse(&mut parser).expect("Failed to parse select item");

        assert_eq!(result.expression, ScalarExpr::WildCard);
        assert_eq!(result.alias, Some(Alias::Star));
    }

    #[test]
    pub fn test_select_item_renamed_wildcard() {
        let mut parser = QueryParser::new("* AS x");

        match SelectItem::parse(&mut parser) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.start, 0);
                assert_eq!(err.end, 6);
            },
        }
    }

    #[test]
    pub fn test_select_item_with_wrong_alias() {
        let mut parser = QueryParser::new("column as #");

        match SelectItem::parse(&mut parser) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.start, 10);
                assert_eq!(err.text, "#");
            },
        }
    }
}
