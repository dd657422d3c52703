use super::FileResponse;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UploadFileResponse {
    pub content: FileResponse,
    pub commit: CommitResponse,
}

#[derive(Debug, Deserialize, Default)]
pub struct CommitResponse {
    pub sha: String,
}
