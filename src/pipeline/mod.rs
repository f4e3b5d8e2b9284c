mod executor;

pub use executor::run_pipeline;
