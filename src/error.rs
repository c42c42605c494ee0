use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid overlay root: element {0} is not part of a live panel")]
    InvalidRoot(u64),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
