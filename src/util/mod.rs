pub mod compiler_log;
pub mod test;
