use crate::parser::{ast::Literal, ParseError, QueryParser};

pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &QueryParser) -> bool {
        parser.current() == '\''
    }

    /// `'...'`, where `''` inside the quotes stands for one `'`.
    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;

        if !StringParser::is_string_delimiter(parser) {
            return Err(ParseError::new("Invalid string value", pivot, parser));
        }
        parser.next();

        let mut text = String::new();
        loop {
            if parser.eof() {
                return Err(ParseError::new("Invalid string", pivot, parser));
            }

            if StringParser::is_string_delimiter(parser) {
                if parser.peek(1) == '\'' {
                    text.push('\'');
                    parser.jump(2);
                    continue;
                }
                parser.next();
                break;
            }

            text.push(parser.current());
            parser.next();
        }

        Ok(Literal::String(text))
    }
}
