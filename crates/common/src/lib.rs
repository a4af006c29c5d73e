pub mod env;
pub mod logging;
pub mod problem;

pub use problem::Problem;
