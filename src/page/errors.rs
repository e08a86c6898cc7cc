use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Radio group not found: [name=\"{0}\"]")]
    MissingRadioGroup(String),

    #[error("Element #{id} is not {expected}")]
    WrongElementKind { id: String, expected: &'static str },
}

pub type PageResult<T> = Result<T, PageError>;
