//! Error types for the tc-app service layer.

/// Application error type that wraps errors from the backend crates
/// behind one interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Sweep not found: {0}")]
    SweepNotFound(String),

    #[error("Cycle error: {0}")]
    Cycle(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<tc_project::ProjectError> for AppError {
    fn from(err: tc_project::ProjectError) -> Self {
        match err {
            tc_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<tc_project::ValidationError> for AppError {
    fn from(err: tc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tc_results::ResultsError> for AppError {
    fn from(err: tc_results::ResultsError) -> Self {
        match err {
            tc_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}

impl From<tc_cycles::CycleError> for AppError {
    fn from(err: tc_cycles::CycleError) -> Self {
        AppError::Cycle(err.to_string())
    }
}
