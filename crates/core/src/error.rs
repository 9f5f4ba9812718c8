use thiserror::Error;

use crate::model::{AnswerError, NavigationError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
}
