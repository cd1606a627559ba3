use guard_core::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("object {0} is already registered")]
    DuplicateObject(ObjectId),
}

pub type WorldResult<T> = Result<T, WorldError>;
