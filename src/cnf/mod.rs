#[allow(clippy::module_inception)]
pub mod cnf;
pub mod extract;
pub mod render;
