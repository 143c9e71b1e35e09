//! Error type for the editor core.

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("file read error: {0}")]
    FileRead(String),

    #[error("selected file is empty")]
    EmptyFile,

    #[error("unsupported image format")]
    UnsupportedFormat,

    #[error("image decode error: {0}")]
    Decode(String),
}

impl EditorError {
    pub fn file_read(msg: impl Into<String>) -> Self {
        Self::FileRead(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(EditorError::file_read("x")
            .to_string()
            .contains("file read error:"));
        assert!(EditorError::decode("x")
            .to_string()
            .contains("image decode error:"));
        assert_eq!(EditorError::EmptyFile.to_string(), "selected file is empty");
    }
}
