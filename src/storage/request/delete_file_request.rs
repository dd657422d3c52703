use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFileRequest {
    pub message: String,
    pub sha: String,
}

impl DeleteFileRequest {
    pub fn new(message: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sha: sha.into(),
        }
    }
}
