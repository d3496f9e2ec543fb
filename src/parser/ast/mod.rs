pub mod text_collector;
pub use text_collector::*;

pub mod column_identifier;
pub use column_identifier::*;

pub mod literals;
pub use literals::*;

pub mod function;
pub use function::*;

pub mod args_parser;
pub use args_parser::*;

pub mod scalar_expr;
pub use scalar_expr::*;

pub mod select_item;
pub use select_item::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod collection;
pub use collection::*;

pub mod query;
pub use query::*;
