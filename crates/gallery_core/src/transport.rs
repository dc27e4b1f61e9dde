//! HTTP access to the gallery backend.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Comment, Photo, PhotoId},
    error::ApiError,
    protocol::{
        ActionRequest, ActionTotal, CommentsQuery, COMMENTS_ROUTE, FORM_CONTENT_TYPE,
        JSON_CONTENT_TYPE, PHOTOS_ROUTE,
    },
};
use tracing::{debug, warn};
use url::Url;

use crate::{GalleryError, Result};

/// Result of a POST the backend may decline. Only `200 OK` is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum PostOutcome<T> {
    Accepted(T),
    Rejected { status: u16 },
}

#[async_trait]
pub trait GalleryApi: Send + Sync {
    async fn fetch_photos(&self) -> Result<Vec<Photo>>;
    async fn fetch_comments(&self, photo_id: PhotoId) -> Result<Vec<Comment>>;
    async fn post_action(
        &self,
        path: &str,
        request: &ActionRequest,
    ) -> Result<PostOutcome<ActionTotal>>;
    async fn post_form(&self, path: &str, body: String) -> Result<PostOutcome<Comment>>;
}

/// [`GalleryApi`] over `reqwest`. Paths resolve against `base_url` the way a
/// browser resolves them against the page origin.
pub struct HttpGalleryApi {
    http: Client,
    base_url: Url,
}

impl HttpGalleryApi {
    pub fn new(server_url: &str) -> Result<Self> {
        Ok(Self::with_client(Client::new(), Url::parse(server_url)?))
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

async fn decode_body<T: DeserializeOwned>(response: Response, context: &'static str) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| GalleryError::Decode { context, source })
}

async fn accept_ok<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<PostOutcome<T>> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(PostOutcome::Accepted(decode_body(response, context).await?));
    }

    let body = response.bytes().await.unwrap_or_default();
    match ApiError::from_body(&body) {
        Some(api_error) => warn!(
            status = status.as_u16(),
            code = ?api_error.code,
            message = %api_error.message,
            "{context} rejected by server"
        ),
        None => warn!(status = status.as_u16(), "{context} rejected by server"),
    }
    Ok(PostOutcome::Rejected {
        status: status.as_u16(),
    })
}

#[async_trait]
impl GalleryApi for HttpGalleryApi {
    async fn fetch_photos(&self) -> Result<Vec<Photo>> {
        let url = self.resolve(PHOTOS_ROUTE)?;
        debug!(%url, "fetching photos");
        let res = self.http.get(url).send().await?;
        decode_body(res, "photos").await
    }

    async fn fetch_comments(&self, photo_id: PhotoId) -> Result<Vec<Comment>> {
        let url = self.resolve(COMMENTS_ROUTE)?;
        debug!(%url, %photo_id, "fetching comments");
        let res = self
            .http
            .get(url)
            .query(&CommentsQuery { photo_id })
            .send()
            .await?;
        decode_body(res, "comments").await
    }

    async fn post_action(
        &self,
        path: &str,
        request: &ActionRequest,
    ) -> Result<PostOutcome<ActionTotal>> {
        let url = self.resolve(path)?;
        debug!(%url, "posting action");
        // `json` keeps an explicit content type, so the charset survives.
        let res = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(request)
            .send()
            .await?;
        accept_ok(res, "action").await
    }

    async fn post_form(&self, path: &str, body: String) -> Result<PostOutcome<Comment>> {
        let url = self.resolve(path)?;
        debug!(%url, "posting comment form");
        let res = self
            .http
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        accept_ok(res, "comment form").await
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
