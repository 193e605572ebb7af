use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Content collections that are displayed in a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ContentKind {
    CoverArts,
    RepresentativeWorks,
    ResearchHighlights,
}

impl ContentKind {
    pub const ALL: [Self; 3] = [
        Self::CoverArts,
        Self::RepresentativeWorks,
        Self::ResearchHighlights,
    ];

    /// REST resource segment under `/api/`.
    pub fn resource(self) -> &'static str {
        match self {
            ContentKind::CoverArts => "cover-arts",
            ContentKind::RepresentativeWorks => "representative-works",
            ContentKind::ResearchHighlights => "research-highlights",
        }
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource())
    }
}

impl FromStr for ContentKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.resource() == normalized)
            .ok_or_else(|| ModelError::UnknownContentKind(s.to_string()))
    }
}
