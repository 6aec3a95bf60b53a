//! Rename flow.
//!
//! A rename is validated synchronously, the selection moves on to the next
//! sibling, and only then does the request go out. Its outcome becomes a
//! status message and nothing else: the tree is not refreshed and the
//! advance is not undone on failure.

use super::api::{LibraryApi, RenameRequest};
use super::error::RenameError;
use crate::models::RelativePath;
use crate::utils::console;

/// Build a request from the current selection and the typed name.
pub fn validate(current: Option<&RelativePath>, new_name: &str) -> Result<RenameRequest, RenameError> {
    let path = current
        .filter(|p| !p.is_empty())
        .ok_or(RenameError::NoSelection)?;
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(RenameError::EmptyName);
    }
    Ok(RenameRequest {
        path: path.clone(),
        new_name: new_name.to_string(),
    })
}

pub fn success_message(request: &RenameRequest) -> String {
    format!("renamed:{} to {}", request.path, request.new_name)
}

/// Send `request` and describe the outcome for the status line.
pub async fn submit<A: LibraryApi>(api: &A, request: &RenameRequest) -> String {
    match api.rename(request).await {
        Ok(response) => {
            if let Some(new_path) = &response.new_path {
                console::info(&format!("renamed {} -> {}", request.path, new_path));
            }
            success_message(request)
        }
        Err(e) => {
            match &e {
                RenameError::Rejected { status, body } => {
                    console::warn(&format!("rename rejected ({}): {}", status, body))
                }
                other => console::error(&format!("rename failed: {:?}", other)),
            }
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::api::RenameResponse;
    use crate::core::error::FetchError;
    use crate::models::LibraryNode;

    struct FakeApi {
        outcome: fn() -> Result<RenameResponse, RenameError>,
        calls: RefCell<Vec<RenameRequest>>,
    }

    impl FakeApi {
        fn new(outcome: fn() -> Result<RenameResponse, RenameError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LibraryApi for FakeApi {
        async fn fetch_tree(&self, _search: Option<&str>) -> Result<LibraryNode, FetchError> {
            Err(FetchError::Timeout)
        }

        async fn rename(&self, request: &RenameRequest) -> Result<RenameResponse, RenameError> {
            self.calls.borrow_mut().push(request.clone());
            (self.outcome)()
        }
    }

    fn request() -> RenameRequest {
        validate(Some(&"a.mp4".into()), " z.mp4 ").unwrap()
    }

    #[test]
    fn test_validate() {
        assert_eq!(request().new_name, "z.mp4");
        assert_eq!(validate(None, "z.mp4"), Err(RenameError::NoSelection));
        assert_eq!(
            validate(Some(&RelativePath::new("")), "z.mp4"),
            Err(RenameError::NoSelection)
        );
        assert_eq!(
            validate(Some(&"a.mp4".into()), "   "),
            Err(RenameError::EmptyName)
        );
    }

    #[tokio::test]
    async fn test_success_message() {
        let api = FakeApi::new(|| Ok(RenameResponse::default()));
        let msg = submit(&api, &request()).await;
        assert_eq!(msg, "renamed:a.mp4 to z.mp4");
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_success_message_ignores_reported_path() {
        let api = FakeApi::new(|| {
            Ok(RenameResponse {
                ok: true,
                new_path: Some("b/z.mp4".into()),
            })
        });
        assert_eq!(submit(&api, &request()).await, "renamed:a.mp4 to z.mp4");
    }

    #[tokio::test]
    async fn test_rejection_surfaces_body() {
        let api = FakeApi::new(|| {
            Err(RenameError::Rejected {
                status: 409,
                body: "exists".to_string(),
            })
        });
        assert_eq!(submit(&api, &request()).await, "rename error: exists");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let api = FakeApi::new(|| Err(FetchError::NetworkError("offline".to_string()).into()));
        assert_eq!(submit(&api, &request()).await, "rename failed");
    }
}
