// SELECT parse_json('{"": 5, "pwet": 10}') AS *, "" AS empty
// FROM (SELECT * FROM dataset)

use std::fmt;

use crate::parser::{ast::{Collection, ProjectionParser, SelectItem}, ParseError, Phase, QueryParser};

#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub projection: Vec<SelectItem>,
    pub collection: Option<Collection>,
}

impl Query {
    /// Parse one `SELECT`, stopping at the end of the text or at the `)`
    /// closing the subquery it belongs to.
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        let pivot = parser.position;
        if !ProjectionParser::is_projection_start(parser) {
            return ParseError::new("Expected SELECT", pivot, parser).err();
        }
        parser.jump(parser.comparers.select.length);

        let outer_phase = parser.phase;
        parser.phase = Phase::Projection;

        let mut query = Query::default();

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => query.projection = ProjectionParser::parse(parser)?,
                Phase::Source => query.collection = Some(Collection::parse(parser)?),
                Phase::EOF => break,
            }
        }

        parser.phase = outer_phase;

        Ok(query)
    }
}

impl TryFrom<&str> for Query {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        Query::parse(&mut parser)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proj = self.projection.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "SELECT {}", proj)?;

        if let Some(collection) = &self.collection {
            write!(f, " FROM {}", collection)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query(projection={:?}, collection={:?})", self.projection, self.collection)
    }
}
