use std::fmt;

use crate::parser::{ast::TextCollector, ParseError, QueryParser};

/// A column name as written in query text.
///
/// `name` is the literal column name with any quoting already removed;
/// `quoted` remembers whether it was written between double quotes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColumnIdentifier {
    pub name: String,
    pub quoted: bool,
}

impl ColumnIdentifier {
    pub fn bare(name: impl Into<String>) -> Self {
        Self { name: name.into(), quoted: false }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Self { name: name.into(), quoted: true }
    }

    /// SQL form of the identifier, keeping the author's quoting choice.
    pub fn to_sql(&self) -> String {
        match self.quoted {
            true => format!("\"{}\"", self.name.replace('"', "\"\"")),
            false => self.name.clone(),
        }
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl fmt::Debug for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quoted {
            true => write!(f, "Quoted({})", self),
            false => write!(f, "Bare({})", self),
        }
    }
}

pub struct IdentifierParser;

impl IdentifierParser {
    pub fn is_quoted_start(parser: &QueryParser) -> bool {
        parser.current() == '"'
    }

    pub fn parse(parser: &mut QueryParser) -> Result<ColumnIdentifier, ParseError> {
        if IdentifierParser::is_quoted_start(parser) {
            return IdentifierParser::parse_quoted(parser);
        }

        let pivot = parser.position;
        if parser.current().is_ascii_digit() {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        let name = TextCollector::collect(parser)?;
        if name.is_empty() {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        Ok(ColumnIdentifier::bare(name))
    }

    /// `"..."`, where `""` inside the quotes stands for one `"`.
    pub fn parse_quoted(parser: &mut QueryParser) -> Result<ColumnIdentifier, ParseError> {
        let pivot = parser.position;

        if !IdentifierParser::is_quoted_start(parser) {
            return ParseError::new("Invalid quoted identifier", pivot, parser).err();
        }
        parser.next();

        let mut name = String::new();
        loop {
            if parser.eof() {
                return ParseError::new("Unterminated quoted identifier", pivot, parser).err();
            }

            let current = parser.current();
            if current == '"' {
                if parser.peek(1) == '"' {
                    name.push('"');
                    parser.jump(2);
                    continue;
                }
                parser.next();
                break;
            }

            name.push(current);
            parser.next();
        }

        Ok(ColumnIdentifier::quoted(name))
    }
}
