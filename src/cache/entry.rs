use serde::{Deserialize, Serialize};

use crate::types::RequestKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Patch,
}

impl Method {
    pub fn is_get(&self) -> bool {
        matches!(self, Method::Get)
    }
}

/// An outbound resource request as seen by the serving pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// Accept header; `*/*` when the caller did not set one.
    pub accept: String,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Request {
            method: Method::Get,
            url: url.into(),
            accept: "*/*".to_string(),
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Request {
            method: Method::Post,
            url: url.into(),
            accept: "*/*".to_string(),
        }
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn key(&self) -> RequestKey {
        RequestKey::new(&self.url)
    }

    /// HTML navigation, per the Accept header.
    pub fn wants_html(&self) -> bool {
        self.accept.contains("text/html")
    }

    pub fn wants_image(&self) -> bool {
        if self.accept.starts_with("image/") {
            return true;
        }
        matches!(
            self.extension(),
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico")
        )
    }

    pub fn is_stylesheet(&self) -> bool {
        matches!(self.extension(), Some("css"))
    }

    pub fn is_script(&self) -> bool {
        matches!(self.extension(), Some("js" | "mjs"))
    }

    fn extension(&self) -> Option<&str> {
        let path = match self.url.split_once('?') {
            Some((before, _)) => before,
            None => &self.url,
        };
        let segment = path.rsplit('/').next().unwrap_or(path);
        match segment.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}

/// The atomic cached unit: status, content type, and body bytes of a
/// response, as stored in and served from a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl StoredResponse {
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        StoredResponse {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        StoredResponse::new(200, content_type, body)
    }

    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        StoredResponse::new(200, "text/html", body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
