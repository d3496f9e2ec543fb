pub mod literal;
pub use literal::Literal;

pub mod string_parser;
pub use string_parser::StringParser;

pub mod number_parser;
pub use number_parser::NumberParser;

pub mod bool_parser;
pub use bool_parser::BoolParser;

pub mod null_parser;
pub use null_parser::NullParser;
