pub(crate) mod macros;
pub mod request;
pub mod response;

use crate::{config::Config, delete, get, http, put};
use anyhow::{Context, Result};
use base64::{prelude::BASE64_STANDARD, Engine};
use request::{DeleteFileRequest, SerializeRequest, UploadFileRequest};
use response::{FileResponse, UploadFileResponse};
use std::path::Path;

pub struct StorageClient {
    config: Config,
}

impl StorageClient {
    pub fn new(config: Config) -> Self {
        StorageClient { config }
    }

    /// Uploads the local file at `src` to `dst` inside the storage folder.
    /// Passing the current file sha switches the commit from create to
    /// update semantics.
    pub async fn upload(
        &self,
        src: impl AsRef<Path>,
        dst: &str,
        message: &str,
        sha: Option<String>,
    ) -> Result<UploadFileResponse> {
        let dst = normalize_path(dst);

        let content = tokio::fs::read(src.as_ref())
            .await
            .with_context(|| format!("Failed to read src {}", src.as_ref().display()))?;
        let content = BASE64_STANDARD.encode(content);

        let message = if message.is_empty() {
            format!("Upload {}", dst)
        } else {
            message.to_owned()
        };

        let body = UploadFileRequest::new(message, content, sha).into_request()?;

        let url = format!("{}{}", self.base_url(), dst);
        let response = put!(&url, &self.config.token, body)?;

        let uploaded = serde_json::from_str::<UploadFileResponse>(&response)
            .map_err(|cause| http::Error::ParseResponseError { cause })?;

        Ok(uploaded)
    }

    /// Fetches the metadata (and base64 content) of a single file. A missing
    /// file comes back as `None`, any other failure as an error.
    pub async fn retrieve_file(&self, path: &str) -> Result<Option<FileResponse>> {
        let path = normalize_path(path);
        let url = format!("{}{}", self.base_url(), path);

        let response = match get!(&url, &self.config.token) {
            Ok(response) => response,
            Err(http::Error::NotFoundError) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let file = serde_json::from_str::<FileResponse>(&response)
            .map_err(|cause| http::Error::ParseResponseError { cause })?;

        Ok(Some(file))
    }

    /// Lists the storage folder. Listing entries carry no content.
    pub async fn retrieve_files(&self) -> Result<Vec<FileResponse>> {
        let response = get!(&self.base_url(), &self.config.token)?;

        let files = serde_json::from_str::<Vec<FileResponse>>(&response)
            .map_err(|cause| http::Error::ParseResponseError { cause })?;

        Ok(files)
    }

    /// Deletes the file at `path`, committing with the given sha. Returns the
    /// raw response body.
    pub async fn delete_file(&self, path: &str, sha: &str, message: &str) -> Result<String> {
        let path = normalize_path(path);

        let message = if message.is_empty() {
            format!("Delete {}", path)
        } else {
            message.to_owned()
        };

        let body = DeleteFileRequest::new(message, sha).into_request()?;

        let url = format!("{}{}", self.base_url(), path);
        let response = delete!(&url, &self.config.token, body)?;

        Ok(response)
    }

    fn base_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_url, self.config.owner, self.config.repository, self.config.path
        )
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{}", path)
    }
}
