pub mod process;
pub mod repo;
pub mod tools_env;
