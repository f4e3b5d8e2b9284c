pub mod cli;
pub mod error;
pub mod hub;
pub mod jobs;
pub mod pipeline;
pub mod runner;
pub mod util;

pub use cli::RunConfig;
pub use jobs::{DatasetJob, JOBS};
pub use runner::{CommandRunner, Invocation, LocalRunner};
