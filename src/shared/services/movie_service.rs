#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use crate::shared::errors::{DeleteError, Result};

/// Backend call that removes a movie from a user's list.
#[allow(async_fn_in_trait)]
pub trait MovieService {
    /// Send `DELETE` to `path`. Any non-2xx status is an error.
    async fn delete_movie(&self, path: &str) -> Result<()>;
}

/// Same-origin HTTP client backed by `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpMovieService {
    base_url: String,
}

impl HttpMovieService {
    /// Relative paths, resolved against the current page's origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl MovieService for HttpMovieService {
    #[cfg(target_arch = "wasm32")]
    async fn delete_movie(&self, path: &str) -> Result<()> {
        let url = self.url_for(path);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| DeleteError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(DeleteError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn delete_movie(&self, path: &str) -> Result<()> {
        // fetch only exists in the browser
        tracing::warn!("DELETE not available outside the browser: {}", self.url_for(path));
        Err(DeleteError::Transport("fetch is unavailable on this target".to_string()))
    }
}
