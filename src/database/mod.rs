pub mod config;
pub use config::*;

pub mod column_name;
pub use column_name::*;

pub mod cell_value;
pub use cell_value::*;

pub mod row;
pub use row::*;

pub mod row_builder;
pub use row_builder::*;

pub mod dataset;
pub use dataset::*;

pub mod db;
pub use db::*;
