use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid average value: '{0}'")]
    InvalidAverage(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type TrackerResult<T> = Result<T, TrackerError>;
