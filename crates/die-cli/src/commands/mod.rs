pub mod analyze;
pub mod table;
pub mod test;
