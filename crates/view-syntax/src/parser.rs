use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/view.pest"]
pub struct ViewParser;
