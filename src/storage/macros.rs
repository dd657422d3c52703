use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
    fn json_body(self, body: String) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(USER_AGENT, "repofile")
    }

    fn json_body(self, body: String) -> RequestBuilder {
        self.header(CONTENT_TYPE, "application/json").body(body)
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr, $token:expr) => {{
        use $crate::{http::ResponseHandler, storage::macros::Headers};

        $crate::http::HttpClient::new()
            .get($url)
            .github_headers($token)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! put {
    ($url:expr, $token:expr, $body:expr) => {{
        use $crate::{http::ResponseHandler, storage::macros::Headers};

        $crate::http::HttpClient::new()
            .put($url)
            .github_headers($token)
            .json_body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! delete {
    ($url:expr, $token:expr, $body:expr) => {{
        use $crate::{http::ResponseHandler, storage::macros::Headers};

        $crate::http::HttpClient::new()
            .delete($url)
            .github_headers($token)
            .json_body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "token test_token")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("user-agent", "repofile")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(url, "test_token")?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn put_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("PUT", "/")
            .match_header("authorization", "token test_token")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "repofile")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = put!(url, "test_token", expected_body.to_owned())?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn delete_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("DELETE", "/")
            .match_header("authorization", "token test_token")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "repofile")
            .match_body(expected_body)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = delete!(url, "test_token", expected_body.to_owned())?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }
}
