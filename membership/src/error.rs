use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembershipError {
    #[error("caller {0} is not the registry administrator")]
    Unauthorized(String),
}
