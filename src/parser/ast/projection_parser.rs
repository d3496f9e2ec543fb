use crate::parser::{ast::SelectItem, ParseError, QueryParser};

pub struct ProjectionParser;

impl ProjectionParser {
    pub fn is_projection_start(parser: &QueryParser) -> bool {
        parser.comparers.select.compare(parser)
    }

    /// Parse the select list up to FROM, the end of the text, or the `)`
    /// closing the enclosing subquery.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<SelectItem>, ParseError> {
        let mut result: Vec<SelectItem> = vec![];
        let mut can_consume = true;

        while !parser.check_next_phase() {
            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid projection", parser.position, parser).err();
                }

                can_consume = true;
                parser.next();
                continue;
            }

            if !can_consume {
                return ParseError::new("Invalid projection", parser.position, parser).err();
            }
            result.push(SelectItem::parse(parser)?);
            can_consume = false;
        }

        if can_consume {
            return ParseError::new("Invalid projection", parser.position, parser).err();
        }

        Ok(result)
    }
}
