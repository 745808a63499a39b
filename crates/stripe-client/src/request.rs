//! Typed request descriptors.
//!
//! A [`Request<A>`] is an unexecuted Stripe call paired with the type its
//! response decodes into. Building one never touches the network. The
//! [`Executor`](crate::Executor) consumes it.

use std::fmt;
use std::marker::PhantomData;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::form::Params;

/// Stripe API base URL.
pub const API_BASE: &str = "https://api.stripe.com/v1/";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP method of a Stripe call, with its form parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// Read a resource. No body.
    Get,
    /// Create or update a resource.
    Post(Params),
    /// Delete or cancel a resource.
    Delete(Params),
}

impl Method {
    /// Converts to the equivalent `reqwest::Method`.
    #[must_use]
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post(_) => reqwest::Method::POST,
            Self::Delete(_) => reqwest::Method::DELETE,
        }
    }
}

/// A request descriptor whose response decodes into `A`.
pub struct Request<A> {
    method: reqwest::Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    _response: PhantomData<fn() -> A>,
}

impl<A> Request<A> {
    /// Build a request for `path`, relative to [`API_BASE`].
    ///
    /// `path` may carry a literal query string such as `?expand[]=customer`.
    /// POST and DELETE parameters become a form-encoded body.
    #[must_use]
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        let verb = method.to_reqwest();
        let mut headers = HeaderMap::new();
        let body = match method {
            Method::Get => None,
            Method::Post(params) | Method::Delete(params) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
                Some(params.encode().into_bytes())
            }
        };

        Self {
            method: verb,
            path: path.into(),
            headers,
            body,
            _response: PhantomData,
        }
    }

    /// Build a GET request for `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, Method::Get)
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &reqwest::Method {
        &self.method
    }

    /// The path relative to the API base, including any query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The absolute URL against the live API.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{API_BASE}{}", self.path)
    }

    /// Headers the request carries, excluding authentication.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The encoded body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn into_parts(self) -> (reqwest::Method, String, HeaderMap, Option<Vec<u8>>) {
        (self.method, self.path, self.headers, self.body)
    }
}

impl<A> Clone for Request<A> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            path: self.path.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
            _response: PhantomData,
        }
    }
}

impl<A> fmt::Debug for Request<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("body", &self.body().map(String::from_utf8_lossy))
            .finish()
    }
}

/// Renders `METHOD URL`, then a blank line and the body when there is one.
impl<A> fmt::Display for Request<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url())?;
        if let Some(body) = &self.body {
            write!(f, "\n\n{}", String::from_utf8_lossy(body))?;
        }
        Ok(())
    }
}
