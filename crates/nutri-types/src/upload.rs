use serde::{Deserialize, Serialize};

/// A local file chosen by the user, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
