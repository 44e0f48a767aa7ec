//! Homework status endpoint

use homework_core::domain::cursor::Cursor;
use homework_core::domain::homework::FetchResult;
use homework_core::dto::statuses::HomeworkStatuses;
use tracing::{debug, warn};

use crate::PraktikumClient;
use crate::error::Result;

impl PraktikumClient {
    /// Fetch status changes made since `from`
    ///
    /// Issues exactly one `GET <endpoint>?from_date=<from>` with an
    /// `Authorization: OAuth <token>` header. Records come back in API order
    /// (newest first). A response without a `homeworks` list is read as an
    /// empty batch.
    pub async fn homework_statuses(&self, from: Cursor) -> Result<FetchResult> {
        debug!(from_date = from.as_secs(), "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from.as_secs())])
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await?;

        let statuses: HomeworkStatuses = crate::handle_response(response).await?;
        if !statuses.has_homeworks() {
            warn!("Review API response has no homeworks list, treating it as empty");
        }

        Ok(statuses.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use homework_core::domain::homework::SubmissionRecord;
    use reqwest::Client;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PraktikumClient {
        PraktikumClient::new(format!("{}/homework_statuses/", server.uri()), "token")
    }

    #[tokio::test]
    async fn test_fetch_sends_cursor_and_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/homework_statuses/"))
            .and(query_param("from_date", "1000"))
            .and(header("Authorization", "OAuth token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "homeworks": [
                    {"homework_name": "B", "status": "reviewing"},
                    {"homework_name": "A", "status": "approved"}
                ],
                "current_date": 2000
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .homework_statuses(Cursor::new(1000))
            .await
            .unwrap();

        assert_eq!(
            result.records,
            vec![
                SubmissionRecord::new("B", "reviewing"),
                SubmissionRecord::new("A", "approved"),
            ]
        );
        assert_eq!(result.cursor, Some(Cursor::new(2000)));
    }

    #[tokio::test]
    async fn test_missing_keys_are_empty_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .homework_statuses(Cursor::EPOCH)
            .await
            .unwrap();

        assert!(result.records.is_empty());
        assert_eq!(result.cursor, None);
    }

    #[tokio::test]
    async fn test_non_object_record_keeps_rest_of_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "homeworks": [null, {"homework_name": "A", "status": "approved"}],
                "current_date": 1000
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .homework_statuses(Cursor::EPOCH)
            .await
            .unwrap();

        assert_eq!(
            result.records,
            vec![
                SubmissionRecord::default(),
                SubmissionRecord::new("A", "approved"),
            ]
        );
        assert_eq!(result.cursor, Some(Cursor::new(1000)));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .homework_statuses(Cursor::EPOCH)
            .await
            .unwrap_err();

        assert!(err.is_server_error());
        assert!(err.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .homework_statuses(Cursor::EPOCH)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"homeworks": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let http_client = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let client = PraktikumClient::with_client(
            format!("{}/homework_statuses/", server.uri()),
            "token",
            http_client,
        );

        let err = client.homework_statuses(Cursor::EPOCH).await.unwrap_err();
        assert!(err.is_timeout(), "{err}");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = PraktikumClient::new("http://127.0.0.1:1/homework_statuses/", "token");
        let err = client.homework_statuses(Cursor::EPOCH).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}
