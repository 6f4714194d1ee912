use thiserror::Error;

use crate::visual::VisualError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("population {requested} outside [{min}, {max}]")]
    InvalidPopulation {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("no visual for slot {slot}: {source}")]
    ResourceUnavailable {
        slot: usize,
        #[source]
        source: VisualError,
    },
}
