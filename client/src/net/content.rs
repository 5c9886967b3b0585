//! Content store over the site's REST collections.
//!
//! `/api/{collection}` lists and creates, `/api/{collection}/{id}` reads,
//! updates and deletes. Native builds answer every call with a backend error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use school_portal::content::{ContentError, ContentStore, Record, RecordKind};
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpContentStore;

impl HttpContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(any(test, feature = "csr"))]
fn collection_endpoint(kind: RecordKind) -> String {
    format!("/api/{}", kind.collection())
}

#[cfg(any(test, feature = "csr"))]
fn record_endpoint(kind: RecordKind, id: &str) -> String {
    format!("/api/{}/{}", kind.collection(), urlencoding::encode(id))
}

/// Map a non-success status to a content error.
#[cfg(any(test, feature = "csr"))]
fn status_error(kind: RecordKind, id: Option<&str>, status: u16) -> ContentError {
    match (status, id) {
        (404, Some(id)) => ContentError::NotFound { kind, id: id.to_owned() },
        (401 | 403, _) => ContentError::Forbidden,
        (400 | 422, _) => ContentError::InvalidData,
        _ => ContentError::Backend(format!("{} request failed: {status}", kind.collection())),
    }
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use school_portal::content::{ContentError, RecordKind};
    use serde::de::DeserializeOwned;

    use super::status_error;

    fn backend(err: impl std::fmt::Display) -> ContentError {
        ContentError::Backend(err.to_string())
    }

    /// Send `request` (with an optional JSON body) and reject non-success statuses.
    pub(super) async fn send(
        request: RequestBuilder,
        body: Option<&serde_json::Value>,
        kind: RecordKind,
        id: Option<&str>,
    ) -> Result<Response, ContentError> {
        let resp = match body {
            Some(body) => request.json(body).map_err(backend)?.send().await,
            None => request.send().await,
        }
        .map_err(backend)?;
        if resp.ok() { Ok(resp) } else { Err(status_error(kind, id, resp.status())) }
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ContentError> {
        resp.json::<T>().await.map_err(backend)
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ContentError {
    ContentError::Backend("content backend is only reachable from the browser".to_owned())
}

#[async_trait::async_trait(?Send)]
impl ContentStore for HttpContentStore {
    async fn list_records(&self, kind: RecordKind) -> Result<Vec<Record>, ContentError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::get(&collection_endpoint(kind));
            http::decode(http::send(request, None, kind, None).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = kind;
            Err(unavailable())
        }
    }

    async fn get_record(&self, kind: RecordKind, id: &str) -> Result<Record, ContentError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::get(&record_endpoint(kind, id));
            http::decode(http::send(request, None, kind, Some(id)).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (kind, id);
            Err(unavailable())
        }
    }

    async fn create_record(&self, kind: RecordKind, data: Value) -> Result<Record, ContentError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&collection_endpoint(kind));
            http::decode(http::send(request, Some(&data), kind, None).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (kind, data);
            Err(unavailable())
        }
    }

    async fn update_record(&self, kind: RecordKind, id: &str, data: Value) -> Result<Record, ContentError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::put(&record_endpoint(kind, id));
            http::decode(http::send(request, Some(&data), kind, Some(id)).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (kind, id, data);
            Err(unavailable())
        }
    }

    async fn delete_record(&self, kind: RecordKind, id: &str) -> Result<(), ContentError> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::delete(&record_endpoint(kind, id));
            http::send(request, None, kind, Some(id)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (kind, id);
            Err(unavailable())
        }
    }
}
