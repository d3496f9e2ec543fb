use crate::parser::{ast::{ArgsParser, BoolParser, ColumnIdentifier, Function, IdentifierParser, Literal, NullParser, NumberParser, StringParser, TextCollector}, ParseError, QueryParser};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ScalarExpr {
    Literal(Literal),
    Column(ColumnIdentifier),
    Function(Function),
    WildCard,
}

impl ScalarExpr {
    pub fn parse(parser: &mut QueryParser, allow_wildcard: bool) -> Result<ScalarExpr, ParseError> {
        parser.next_non_whitespace();

        let pivot = parser.position;
        if parser.eof() {
            return ParseError::new("Invalid scalar value", pivot, parser).err();
        }

        if parser.current() == '*' {
            parser.next();
            if !allow_wildcard {
                return ParseError::new("Invalid scalar", pivot, parser).err();
            }
            return Ok(ScalarExpr::WildCard);
        }
        if NumberParser::is_number(parser) {
            return NumberParser::parse(parser)
                .map(ScalarExpr::Literal);
        }
        if StringParser::is_string_delimiter(parser) {
            return StringParser::parse(parser)
                .map(ScalarExpr::Literal);
        }
        if IdentifierParser::is_quoted_start(parser) {
            return IdentifierParser::parse_quoted(parser)
                .map(ScalarExpr::Column);
        }
        if BoolParser::is_bool(parser) {
            return BoolParser::parse(parser)
                .map(ScalarExpr::Literal);
        }
        if NullParser::is_null(parser) {
            return NullParser::parse(parser)
                .map(ScalarExpr::Literal);
        }

        ScalarExpr::parse_column_or_function(parser)
    }

    fn parse_column_or_function(parser: &mut QueryParser) -> Result<ScalarExpr, ParseError> {
        let pivot = parser.position;

        let name = TextCollector::collect(parser)?;
        if name.is_empty() {
            return ParseError::new("Invalid scalar value", pivot, parser).err();
        }

        if ArgsParser::is_args_start(parser) {
            let args = ArgsParser::parse(parser)?;
            return Ok(ScalarExpr::Function(Function { name, args }));
        }

        Ok(ScalarExpr::Column(ColumnIdentifier::bare(name)))
    }

    /// The expression as query text; also the default output column name.
    pub fn to_sql(&self) -> String {
        match self {
            ScalarExpr::Literal(l) => l.to_sql(),
            ScalarExpr::Column(c) => c.to_sql(),
            ScalarExpr::Function(fun) => fun.to_sql(),
            ScalarExpr::WildCard => "*".to_string(),
        }
    }
}

impl fmt::Display for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpr::Literal(l) => write!(f, "lit: {}", l),
            ScalarExpr::Column(c) => write!(f, "col: {}", c),
            ScalarExpr::Function(fun) => write!(f, "{}", fun),
            ScalarExpr::WildCard => write!(f, "*"),
        }
    }
}

impl fmt::Debug for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpr::Literal(_) => write!(f, "Literal({})", self),
            ScalarExpr::Column(_) => write!(f, "Column({})", self),
            ScalarExpr::Function(_) => write!(f, "Function({})", self),
            ScalarExpr::WildCard => write!(f, "WildCard(*)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{ColumnIdentifier, Literal, ScalarExpr}, QueryParser};

    #[test]
    pub fn test_scalar_column_name() {
        let mut parser = QueryParser::new("column");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Column(column)) => assert_eq!(column, ColumnIdentifier::bare("column")),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_column_name_prefixed_with_whitespace() {
        let mut parser = QueryParser::new("  column");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Column(column)) => assert_eq!(column.name, "column"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_quoted_empty_column() {
        let mut parser = QueryParser::new("\"\"");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Column(column)) => assert_eq!(column, ColumnIdentifier::quoted("")),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_string_is_literal() {
        let mut parser = QueryParser::new("'identifier'");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Literal(Literal::String(result))) => assert_eq!(result, "identifier"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_null_parser() {
        let mut parser = QueryParser::new("null");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Literal(Literal::Null)) => {}, //should happen
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_bool_parser_true() {
        let mut parser = QueryParser::new("true");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Literal(Literal::Bool(value))) => assert!(value),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_keyword_prefix_is_column() {
        let mut parser = QueryParser::new("trueish");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Column(column)) => assert_eq!(column.name, "trueish"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_number_parser_int() {
        let mut parser = QueryParser::new("32");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Literal(Literal::Int(value))) => assert_eq!(value, 32),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_function() {
        let mut parser = QueryParser::new(r#"parse_json('{"": 5, "pwet":10}')"#);

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::Function(function)) => {
                assert_eq!(function.name, "parse_json");
                assert_eq!(function.args.len(), 1);
            },
            _ => panic!(),
        }
        assert!(parser.eof());
    }

    #[test]
    pub fn test_scalar_empty() {
        let mut parser = QueryParser::new(" ");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.text, "");
                assert_eq!(err.start, 1);
                assert_eq!(err.end, 1);
            },
        }
    }

    #[test]
    pub fn test_scalar_wildcard() {
        let mut parser = QueryParser::new("*");

        match ScalarExpr::parse(&mut parser, true) {
            Ok(ScalarExpr::WildCard) => {}, //should pass
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_scalar_wildcard_not_allowed() {
        let mut parser = QueryParser::new("*");

        match ScalarExpr::parse(&mut parser, false) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.text, "*");
                assert_eq!(err.start, 0);
                assert_eq!(err.end, 1);
            },
        }
    }

    #[test]
    pub fn test_scalar_to_sql() {
        let mut parser = QueryParser::new(r#"parse_json('{"a": "it''s"}', "", x)"#);

        let expr = ScalarExpr::parse(&mut parser, false).expect("Failed to parse scalar");

        assert_eq!(expr.to_sql(), r#"parse_json('{"a": "it''s"}', "", x)"#);
    }
}
