//! HTTP client for the remote sequence collection.
//!
//! The collection lives at `{base}/api/sequences`; individual resources at
//! `{base}/api/sequences/{id}`. Write responses carry the server's canonical
//! sequence, which callers use to reconcile local state.

use std::collections::BTreeMap;

use reqwest::{header, Client, Response};
use serde::Deserialize;

use crate::error::{SyncError, SyncResult};
use crate::sequence::{Sequence, SequenceId};

/// Error body of a refused delete.
#[derive(Debug, Deserialize)]
struct DeleteRefusal {
    sequence: Option<String>,
}

/// API client for the sequence collection.
pub struct SequenceClient {
    client: Client,
    base_url: String,
}

impl SequenceClient {
    /// Creates a client for the given base URL, unauthenticated.
    pub fn new(base_url: &str) -> SyncResult<Self> {
        Self::with_token(base_url, None)
    }

    /// Creates a client with an optional static bearer token.
    pub fn with_token(base_url: &str, token: Option<&str>) -> SyncResult<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/sequences", self.base_url)
    }

    fn resource_url(&self, id: SequenceId) -> String {
        format!("{}/api/sequences/{}", self.base_url, id)
    }

    /// GET /api/sequences - the entire remote collection.
    pub async fn fetch_all(&self) -> SyncResult<Vec<Sequence>> {
        tracing::debug!(url = %self.collection_url(), "fetching sequence collection");
        let resp = self.client.get(self.collection_url()).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SyncError::api(status, message));
        }

        resp.json().await.map_err(Into::into)
    }

    /// POST /api/sequences - create; the response carries the server-assigned id.
    pub async fn create(&self, sequence: &Sequence) -> SyncResult<Sequence> {
        tracing::debug!(name = %sequence.name, "creating sequence");
        let resp = self
            .client
            .post(self.collection_url())
            .json(sequence)
            .send()
            .await?;

        Self::read_canonical(resp).await
    }

    /// PUT /api/sequences/{id} - full update of one resource.
    pub async fn update(&self, id: SequenceId, sequence: &Sequence) -> SyncResult<Sequence> {
        tracing::debug!(%id, name = %sequence.name, "updating sequence");
        let resp = self
            .client
            .put(self.resource_url(id))
            .json(sequence)
            .send()
            .await?;

        Self::read_canonical(resp).await
    }

    /// DELETE /api/sequences/{id}.
    ///
    /// A refusal body carrying a `sequence` message (e.g. a dependency still
    /// references it) surfaces verbatim as [`SyncError::Refused`].
    pub async fn delete(&self, id: SequenceId) -> SyncResult<()> {
        tracing::debug!(%id, "deleting sequence");
        let resp = self.client.delete(self.resource_url(id)).send().await?;

        if resp.status().is_success() {
            return Ok(());
        }

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        if let Ok(DeleteRefusal {
            sequence: Some(reason),
        }) = serde_json::from_str::<DeleteRefusal>(&body)
        {
            return Err(SyncError::refused(reason));
        }
        Err(SyncError::api(status, body))
    }

    /// Reads the canonical sequence out of a write response, mapping
    /// field-error bodies to [`SyncError::Validation`].
    async fn read_canonical(resp: Response) -> SyncResult<Sequence> {
        if resp.status().is_success() {
            return resp.json().await.map_err(Into::into);
        }

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        if let Ok(fields) = serde_json::from_str::<BTreeMap<String, String>>(&body) {
            if !fields.is_empty() {
                return Err(SyncError::validation(fields));
            }
        }
        Err(SyncError::api(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Step;

    #[tokio::test]
    async fn test_fetch_all_parses_collection() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/sequences")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "name": "one"}, {"id": 2, "name": "two"}]"#)
            .create_async()
            .await;

        let client = SequenceClient::new(&server.url()).unwrap();
        let sequences = client.fetch_all().await.unwrap();

        mock.assert_async().await;
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].id, Some(SequenceId(1)));
        assert_eq!(sequences[1].name, "two");
    }

    #[tokio::test]
    async fn test_create_posts_without_id() {
        let mut server = mockito::Server::new_async().await;
        let mut seq = Sequence::new();
        seq.push_step(Step::new("wait"));

        // Exact-body match: an id or dirty key in the request would not match.
        let expected = serde_json::json!({
            "name": "New Sequence",
            "color": "gray",
            "kind": "sequence",
            "args": {},
            "body": [{"kind": "wait", "args": {}}]
        });
        let mock = server
            .mock("POST", "/api/sequences")
            .match_body(mockito::Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 42, "name": "New Sequence"}"#)
            .create_async()
            .await;

        let client = SequenceClient::new(&server.url()).unwrap();
        let canonical = client.create(&seq).await.unwrap();

        mock.assert_async().await;
        assert_eq!(canonical.id, Some(SequenceId(42)));
    }

    #[tokio::test]
    async fn test_update_targets_the_resource_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/sequences/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 42, "name": "renamed"}"#)
            .create_async()
            .await;

        let client = SequenceClient::new(&server.url()).unwrap();
        let seq = Sequence::new().with_id(SequenceId(42)).with_name("renamed");
        let canonical = client.update(SequenceId(42), &seq).await.unwrap();

        mock.assert_async().await;
        assert_eq!(canonical.name, "renamed");
    }

    #[tokio::test]
    async fn test_write_maps_field_errors_to_validation() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/sequences")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "can't be blank", "color": "is not a valid color"}"#)
            .create_async()
            .await;

        let client = SequenceClient::new(&server.url()).unwrap();
        let err = client.create(&Sequence::new()).await.unwrap_err();

        match err {
            SyncError::Validation { fields } => {
                assert_eq!(fields["name"], "can't be blank");
                assert_eq!(fields["color"], "is not a valid color");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_surfaces_refusal_reason() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/sequences/7")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sequence": "Sequence is still in use by Regimen 4"}"#)
            .create_async()
            .await;

        let client = SequenceClient::new(&server.url()).unwrap();
        let err = client.delete(SequenceId(7)).await.unwrap_err();

        match err {
            SyncError::Refused(reason) => {
                assert_eq!(reason, "Sequence is still in use by Regimen 4");
            }
            other => panic!("expected Refused, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unrecognized_error_body_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/sequences")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = SequenceClient::new(&server.url()).unwrap();
        let err = client.fetch_all().await.unwrap_err();

        match err {
            SyncError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
