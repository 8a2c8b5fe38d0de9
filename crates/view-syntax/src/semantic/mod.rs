pub mod symbol_table;
pub mod validator;

#[cfg(test)]
mod tests;
