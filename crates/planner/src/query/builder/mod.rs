pub mod create_view;
pub mod select;
