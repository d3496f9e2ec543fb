use crate::parser::{ast::Literal, ParseError, QueryParser};

pub struct BoolParser;

impl BoolParser {
    pub fn is_bool(parser: &QueryParser) -> bool {
        parser.comparers.b_true.compare(parser) || parser.comparers.b_false.compare(parser)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        if parser.comparers.b_true.compare(parser) {
            parser.jump(parser.comparers.b_true.length);
            return Ok(Literal::Bool(true));
        }

        if parser.comparers.b_false.compare(parser) {
            parser.jump(parser.comparers.b_false.length);
            return Ok(Literal::Bool(false));
        }

        Err(ParseError::new("Invalid boolean", parser.position, parser))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{BoolParser, Literal}, QueryParser};

    #[test]
    pub fn test_bool_parser_true() {
        let mut parser = QueryParser::new("TRUE,");

        match BoolParser::parse(&mut parser) {
            Ok(Literal::Bool(value)) => assert!(value),
            _ => panic!(),
        }
        assert_eq!(parser.current(), ',');
    }

    #[test]
    pub fn test_bool_parser_false() {
        let mut parser = QueryParser::new("false");

        match BoolParser::parse(&mut parser) {
            Ok(Literal::Bool(value)) => assert!(!value),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_bool_parser_wrong_word() {
        let mut parser = QueryParser::new("truthy");

        match BoolParser::parse(&mut parser) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.start, 0);
                assert_eq!(err.text, "t");
            },
        }
    }
}
