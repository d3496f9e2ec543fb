use crate::parser::{ast::Literal, ParseError, QueryParser};

pub struct NullParser;

impl NullParser {
    pub fn is_null(parser: &QueryParser) -> bool {
        parser.comparers.null.compare(parser)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        if parser.comparers.null.compare(parser) {
            parser.jump(parser.comparers.null.length);
            return Ok(Literal::Null)
        }

        Err(ParseError::new("Invalid null", parser.position, parser))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{Literal, NullParser}, QueryParser};

    #[test]
    pub fn test_null_parser() {
        let text = "null";

        let mut parser = QueryParser::new(text);

        let result = NullParser::parse(&mut parser);

        match result {
            Ok(result) => match result {
                Literal::Null => {}, //should happen
                _ => panic!(),
            },
            Err(_) => panic!(),
        }
    }

    #[test]
    pub fn test_null_parser_prefix_of_identifier() {
        let text = "nullable";

        let parser = QueryParser::new(text);

        assert!(!NullParser::is_null(&parser));
    }
}
