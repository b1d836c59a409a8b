//! Personalized tip model
//!
//! Short pieces of financial or job-search advice, each pointing at a guide.
//! Tips are curated content shipped by the data source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A short piece of advice linked to a guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    /// Stable slug identifying the tip
    pub slug: String,

    /// Headline shown on the dashboard
    pub title: String,

    /// One-paragraph body
    pub body: String,

    /// Slug of the guide this tip links to
    pub guide_slug: String,
}

impl Tip {
    /// Create a new tip
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        guide_slug: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
            guide_slug: guide_slug.into(),
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
