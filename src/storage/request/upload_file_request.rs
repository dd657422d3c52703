use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadFileRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl UploadFileRequest {
    pub fn new(
        message: impl Into<String>,
        content: impl Into<String>,
        sha: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            sha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UploadFileRequest;
    use crate::storage::request::SerializeRequest;

    #[test]
    fn should_omit_sha_when_absent() {
        let request = UploadFileRequest::new("Upload /a.txt", "aGk=", None);

        let body = request.into_request().unwrap();

        assert!(!body.contains("sha"));
        assert!(body.contains(r#""message":"Upload /a.txt""#));
        assert!(body.contains(r#""content":"aGk=""#));
    }

    #[test]
    fn should_include_sha_when_present() {
        let request = UploadFileRequest::new("update", "aGk=", Some("abc123".to_owned()));

        let body = request.into_request().unwrap();

        assert!(body.contains(r#""sha":"abc123""#));
    }
}
