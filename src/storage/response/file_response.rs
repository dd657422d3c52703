use anyhow::Result;
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct FileResponse {
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl FileResponse {
    /// The api wraps base64 content at 60 columns, so the newlines have to go
    /// before decoding.
    pub fn decoded_content(&self) -> Result<String> {
        let encoded: String = self
            .content
            .as_deref()
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let bytes = BASE64_STANDARD.decode(encoded)?;

        Ok(String::from_utf8(bytes)?)
    }
}
