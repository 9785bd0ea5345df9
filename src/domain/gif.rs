//! Gif domain model.
//!
//! A [`Gif`] is one candidate returned by the search service. The state machine
//! treats it as an opaque unit; only the renderer looks inside to show a title
//! and a link. Field names follow Giphy's JSON so records deserialize directly.

use serde::{Deserialize, Serialize};

/// One animated image returned by a search.
///
/// Every field except `id` is optional in practice, so all of them default
/// when missing from the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    /// Service-assigned identifier. Not used for deduplication.
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Page URL on giphy.com.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub images: GifImages,
}

/// The renditions attached to a [`Gif`]. Only the original one is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifImages {
    #[serde(default)]
    pub original: Option<Rendition>,
}

/// A single rendition of a gif. Dimensions arrive as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mp4: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

impl Gif {
    /// Creates a gif with just an id and title, used by tests and fixtures.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: String::new(),
            images: GifImages::default(),
        }
    }

    /// Title to show in the stack, falling back to the id for untitled gifs.
    #[must_use]
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            &self.id
        } else {
            title
        }
    }

    /// Best link for opening the gif: the original rendition, else the page.
    #[must_use]
    pub fn media_url(&self) -> &str {
        self.images
            .original
            .as_ref()
            .map(|r| r.url.as_str())
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.url)
    }

    /// `WxH` of the original rendition when both dimensions are known.
    #[must_use]
    pub fn dimensions(&self) -> Option<String> {
        let original = self.images.original.as_ref()?;
        match (&original.width, &original.height) {
            (Some(w), Some(h)) => Some(format!("{w}x{h}")),
            _ => None,
        }
    }
}
