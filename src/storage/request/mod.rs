mod delete_file_request;
mod upload_file_request;

pub use delete_file_request::DeleteFileRequest;
use serde::Serialize;
pub use upload_file_request::UploadFileRequest;

use anyhow::Result;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for UploadFileRequest {}
impl SerializeRequest for DeleteFileRequest {}
