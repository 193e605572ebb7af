//! Content records served by the portfolio backend.
//!
//! Field names follow the backend's JSON payloads (`image_path`, `alt_text`)
//! so the records deserialize without renames.

use crate::ids::ContentId;

/// A journal cover featuring the author's work.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverArt {
    pub id: ContentId,
    pub title: String,
    /// Absolute CDN URL or a path relative to the API base.
    pub image_path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub journal: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<String>,
    /// Navigation target; cards without one are not clickable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
}

impl CoverArt {
    pub fn is_linked(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}

/// A representative work shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepresentativeWork {
    pub id: ContentId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    pub image_path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
}

/// A research highlight card (20:13 image plus a short caption).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResearchHighlight {
    pub id: ContentId,
    pub image_path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
}

impl ResearchHighlight {
    /// Alt text for the image: explicit alt text, then the caption, then a
    /// generic label.
    pub fn alt(&self) -> &str {
        self.alt_text
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.description.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Research highlight")
    }
}
