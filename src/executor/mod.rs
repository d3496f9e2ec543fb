pub mod eval;
pub use eval::*;

pub mod projection_resolver;
pub use projection_resolver::*;

pub mod plan_executor;
pub use plan_executor::*;

pub mod table_result;
pub use table_result::*;
