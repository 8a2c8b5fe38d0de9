pub mod common;
pub mod create_view;
pub mod expr;
pub mod select;
