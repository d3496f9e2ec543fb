use ordered_float::NotNan;

use crate::parser::{ast::Literal, ParseError, QueryParser, WordComparer};

pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &QueryParser) -> bool {
        let current = parser.current();
        current.is_ascii_digit() ||
            ((current == '+' || current == '-' || current == '.') && parser.peek(1).is_ascii_digit())
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;
        let mut is_float = false;

        if !NumberParser::is_number(parser) {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        if parser.current() == '+' || parser.current() == '-' {
            parser.next();
        }

        while !parser.eof() {
            let current = parser.current();
            if current.is_ascii_digit() {
                parser.next();
            } else if current == '.' && !is_float {
                is_float = true;
                parser.next();
            } else if (current == 'e' || current == 'E') && NumberParser::is_exponent(parser) {
                is_float = true;
                parser.next();
                if parser.current() == '+' || parser.current() == '-' {
                    parser.next();
                }
            } else {
                break;
            }
        }

        if !parser.eof() && !WordComparer::is_any_delimiter(parser.current()) {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        let number = parser.text_from_pivot(pivot);
        let number = match is_float {
            true => {
                let value = number.parse::<f64>().map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                let value = NotNan::new(value).map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                Literal::Float(value)
            },
            // same widening as JSON input: i64, then u64, then f64
            false => match (number.parse::<i64>(), number.parse::<u64>()) {
                (Ok(value), _) => Literal::Int(value),
                (Err(_), Ok(value)) => Literal::UInt(value),
                _ => {
                    let value = number.parse::<f64>().map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                    let value = NotNan::new(value).map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                    Literal::Float(value)
                },
            },
        };

        Ok(number)
    }

    fn is_exponent(parser: &QueryParser) -> bool {
        let next = parser.peek(1);
        next.is_ascii_digit() || ((next == '+' || next == '-') && parser.peek(2).is_ascii_digit())
    }
}
