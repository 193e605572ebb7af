//! Media URL resolution.
//!
//! The backend stores images in object storage and usually returns absolute
//! CDN URLs in `image_path`. Older rows and local development setups return
//! paths relative to the API host instead; those are resolved against the
//! configured base URL.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    /// Base URL without a trailing slash.
    base: String,
}

impl ImageResolver {
    pub fn new(base_url: &Url) -> Self {
        Self {
            base: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an `image_path`. Empty for a missing path.
    pub fn resolve(&self, image_path: Option<&str>) -> String {
        let Some(path) = image_path.filter(|p| !p.is_empty()) else {
            return String::new();
        };
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}
