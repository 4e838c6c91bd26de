use thiserror::Error;

/// Failures of a single bot run, one per pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("source document returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid selector '{0}'")]
    Selector(String),

    #[error("found {0} data tables, need at least 2")]
    NoTableAvailable(usize),

    #[error("selected table has {0} rows, need at least 2")]
    NoRowAvailable(usize),

    #[error("prediction record has {} fields, need at least 2: {:?}", .0.len(), .0)]
    MalformedRecord(Vec<String>),

    #[error("no year in '{0}'")]
    NoYearFound(String),

    #[error("every predictor candidate is protected: {0:?}")]
    AllCandidatesProtected(Vec<String>),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("posting status failed with {status}: {body}")]
    Publish {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("writing message: {0}")]
    Output(#[from] std::io::Error),
}

impl PipelineError {
    /// Whether this error ends the run without it counting as a failure.
    #[inline]
    pub fn is_clean_exit(&self) -> bool {
        match self {
            PipelineError::NoYearFound(_) => true,
            _ => false,
        }
    }
}
