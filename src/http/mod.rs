use reqwest::Client;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Resource not found")]
    NotFoundError,
    #[error("Github API error ({status}): {message}")]
    ApiResponseError { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
    documentation_url: Option<String>,
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if status == 404 {
            return Err(Error::NotFoundError);
        }

        if !(200..300).contains(&status) {
            let message = match serde_json::from_str::<ApiErrorResponse>(&text) {
                Ok(error) => match error.documentation_url {
                    Some(url) => format!("{} ({})", error.message, url),
                    None => error.message,
                },
                Err(_) => text,
            };
            return Err(Error::ApiResponseError { status, message });
        }

        Ok(text)
    }
}
