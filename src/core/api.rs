//! Backend API boundary.
//!
//! The server exposes three endpoints: the library listing, a byte stream
//! per file and a rename operation. [`LibraryApi`] is the seam the rest of
//! the application talks to; [`HttpLibraryApi`] is the browser
//! implementation.

use serde::{Deserialize, Serialize};

use super::error::{FetchError, RenameError};
use crate::config::{ApiConfig, endpoints};
use crate::models::{LibraryNode, RelativePath};
use crate::utils::{fetch_json, post_json};

/// Body of a rename request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub path: RelativePath,
    pub new_name: String,
}

/// Successful rename answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResponse {
    #[serde(default)]
    pub ok: bool,
    /// Path of the renamed file, when the server reports it.
    #[serde(default)]
    pub new_path: Option<RelativePath>,
}

/// Listing URL, with `?search=` only for a non-blank term.
pub fn tree_url(api: &ApiConfig, search: Option<&str>) -> String {
    let base = api.url(endpoints::TREE);
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => format!("{}?search={}", base, urlencoding::encode(term)),
        None => base,
    }
}

/// Stream URL for a file.
pub fn stream_url(api: &ApiConfig, path: &RelativePath) -> String {
    format!(
        "{}?path={}",
        api.url(endpoints::STREAM),
        urlencoding::encode(path.as_str())
    )
}

/// The backend operations used by the application.
#[allow(async_fn_in_trait)]
pub trait LibraryApi {
    /// Fetch the (optionally filtered) library listing.
    async fn fetch_tree(&self, search: Option<&str>) -> Result<LibraryNode, FetchError>;

    /// Rename a file within its folder.
    async fn rename(&self, request: &RenameRequest) -> Result<RenameResponse, RenameError>;
}

/// Browser implementation over `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpLibraryApi {
    config: ApiConfig,
}

impl HttpLibraryApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl LibraryApi for HttpLibraryApi {
    async fn fetch_tree(&self, search: Option<&str>) -> Result<LibraryNode, FetchError> {
        fetch_json(&tree_url(&self.config, search)).await
    }

    async fn rename(&self, request: &RenameRequest) -> Result<RenameResponse, RenameError> {
        let (status, body) = post_json(&self.config.url(endpoints::RENAME), request).await?;
        if !(200..300).contains(&status) {
            return Err(RenameError::Rejected { status, body });
        }
        // A success without a parseable body still counts as success.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
