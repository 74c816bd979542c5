use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::client::{CatalogRequest, CatalogSource, UpstreamError};

/// Scripted catalog: answers by path and records every request.
#[derive(Default)]
pub struct FakeCatalog {
    routes: Mutex<HashMap<String, Result<Value, u16>>>,
    seen: Mutex<Vec<CatalogRequest>>,
}

impl FakeCatalog {
    pub fn respond(&self, path: &str, body: Value) {
        self.routes.lock().unwrap().insert(path.to_string(), Ok(body));
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.routes.lock().unwrap().insert(path.to_string(), Err(status));
    }

    pub fn requests(&self) -> Vec<CatalogRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch(&self, request: CatalogRequest) -> Result<Value, UpstreamError> {
        self.seen.lock().unwrap().push(request.clone());
        let outcome = self.routes.lock().unwrap().get(&request.path).cloned();
        match outcome {
            Some(Ok(body)) => Ok(body),
            Some(Err(status)) => Err(UpstreamError::Status {
                path: request.path,
                status,
            }),
            None => Err(UpstreamError::Status {
                path: request.path,
                status: 404,
            }),
        }
    }
}
