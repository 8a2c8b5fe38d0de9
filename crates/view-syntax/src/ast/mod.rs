pub mod attribute;
pub mod doc;
pub mod dotpath;
pub mod expr;
pub mod ident;
pub mod literal;
pub mod operator;
pub mod span;
pub mod view;
pub mod visitor;
