use crate::parser::{ast::ScalarExpr, ParseError, QueryParser};

pub struct ArgsParser;

impl ArgsParser {
    pub fn is_args_start(parser: &QueryParser) -> bool {
        parser.current() == '('
    }

    pub fn is_args_end(parser: &QueryParser) -> bool {
        parser.current() == ')'
    }

    /// Parse `( arg, ... )`, leaving the cursor after the closing parenthesis.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<ScalarExpr>, ParseError> {
        let pivot = parser.position;
        let mut args: Vec<ScalarExpr> = vec![];
        let mut can_consume = true;

        if !ArgsParser::is_args_start(parser) {
            return Err(ParseError::new("Invalid args value", pivot, parser));
        }
        parser.next();

        while !parser.eof() && !ArgsParser::is_args_end(parser) {
            if parser.current().is_whitespace() {
                parser.next();
            } else if parser.current() == ',' {
                if can_consume {
                    return Err(ParseError::new("Invalid args value", pivot, parser));
                }
                can_consume = true;
                parser.next();
            } else {
                if !can_consume {
                    return Err(ParseError::new("Invalid args value", pivot, parser));
                }
                args.push(ScalarExpr::parse(parser, false)?);
                can_consume = false;
            }
        }

        if parser.eof() || (can_consume && !args.is_empty()) {
            return Err(ParseError::new("Invalid args value", pivot, parser));
        }
        parser.next();

        Ok(args)
    }
}
