//! Transport abstraction consumed by resource clients.
//!
//! A transport owns everything below the resource layer: building the full
//! URL, authentication, sending the request and decoding the body. Resources
//! only hand it a path and optional query parameters.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::query::QueryParams;

/// Issues authenticated GET requests and decodes their JSON bodies.
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the API host) with optional query parameters.
    fn get<R>(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> impl Future<Output = Result<R>> + Send
    where
        R: DeserializeOwned + Send;
}

impl<T: Transport> Transport for &T {
    fn get<R>(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> impl Future<Output = Result<R>> + Send
    where
        R: DeserializeOwned + Send,
    {
        (**self).get(path, params)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn get<R>(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> impl Future<Output = Result<R>> + Send
    where
        R: DeserializeOwned + Send,
    {
        (**self).get(path, params)
    }
}
