use std::fmt;

use crate::{
    database::ColumnName,
    parser::{ast::{IdentifierParser, Query}, ParseError, Phase, QueryParser},
};

/// Where a query reads its rows from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    Dataset { name: String },
    Query(Box<Query>),
}

impl Collection {
    pub fn parse(parser: &mut QueryParser) -> Result<Collection, ParseError> {
        let pivot = parser.position;
        if !parser.comparers.from.compare(parser) {
            return ParseError::new("Expected FROM", pivot, parser).err();
        }
        parser.phase = Phase::Source;
        parser.jump(parser.comparers.from.length);
        parser.next_non_whitespace();

        let collection = if parser.current() == '(' {
            Collection::parse_subquery(parser)?
        } else {
            Collection::Dataset { name: IdentifierParser::parse(parser)?.name }
        };

        parser.next_non_whitespace();
        let pivot = parser.position;
        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token", pivot, parser).err();
        }

        Ok(collection)
    }

    fn parse_subquery(parser: &mut QueryParser) -> Result<Collection, ParseError> {
        let pivot = parser.position;
        parser.next();
        parser.depth += 1;

        let query = Query::parse(parser)?;

        parser.next_non_whitespace();
        if parser.current() != ')' {
            return ParseError::new("Unclosed subquery", pivot, parser).err();
        }
        parser.next();
        parser.depth -= 1;

        Ok(Collection::Query(Box::new(query)))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Dataset { name } => write!(f, "{}", ColumnName::new(name.as_str()).render()),
            Collection::Query(query) => write!(f, "({})", query),
        }
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Dataset { name } => write!(f, "Dataset({})", name),
            Collection::Query(query) => write!(f, "SubQuery({:?})", query),
        }
    }
}
