pub use self::{
    compose::compose,
    config::{Config, Credentials},
    error::PipelineError,
    extract::{extract, PredictionRecord},
    interpret::{interpret, StructuredPrediction},
    pipeline::{generate, run},
    publish::{Print, Publisher, Twitter},
};

pub mod compose;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod interpret;
pub mod log;
pub mod pipeline;
pub mod publish;

#[cfg(test)]
mod testing;

pub type Error = anyhow::Error;

pub type Result<T> = anyhow::Result<T>;
