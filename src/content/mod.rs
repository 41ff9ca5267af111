//! Site content: the static catalog behind every page section.
//!
//! DESIGN
//! ======
//! Content is plain data compiled into the binary. [`SiteContent::catalog`]
//! builds it once at startup; handlers share it read-only through `Arc`.
//! Category, orientation, and media kind are closed enums so an unknown
//! value can never reach a handler.

mod catalog;
pub mod filter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use filter::{WorkQuery, filter_work};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";
const YOUTUBE_EMBED_PARAMS: &str = "autoplay=0&controls=0&rel=0&modestbranding=1&playsinline=1";
const INSTAGRAM_POST_BASE: &str = "https://www.instagram.com/p";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

// =============================================================================
// CATEGORY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Brand Campaigns")]
    BrandCampaigns,
    #[serde(rename = "Events & Festivals")]
    EventsFestivals,
    #[serde(rename = "Creative / Model Work")]
    CreativeModelWork,
    #[serde(rename = "YouTube & Cinematic")]
    YoutubeCinematic,
    #[serde(rename = "Photography")]
    Photography,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::BrandCampaigns,
        Self::EventsFestivals,
        Self::CreativeModelWork,
        Self::YoutubeCinematic,
        Self::Photography,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BrandCampaigns => "Brand Campaigns",
            Self::EventsFestivals => "Events & Festivals",
            Self::CreativeModelWork => "Creative / Model Work",
            Self::YoutubeCinematic => "YouTube & Cinematic",
            Self::Photography => "Photography",
        }
    }

    /// Photography has its own section and is not offered as a work-grid tab.
    #[must_use]
    pub fn in_work_grid(self) -> bool {
        !matches!(self, Self::Photography)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContentError::UnknownCategory(s.to_owned()))
    }
}

/// Work-grid filter: every category, or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Filter tabs in display order: `All`, then every grid category.
#[must_use]
pub fn filter_categories() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            Category::ALL
                .into_iter()
                .filter(|c| c.in_work_grid())
                .map(CategoryFilter::Only),
        )
        .collect()
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// What plays when a work item is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Youtube {
        id: String,
    },
    Mp4 {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster: Option<String>,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
}

impl Media {
    /// URL the player loads: privacy-enhanced embed for YouTube, the file itself otherwise.
    #[must_use]
    pub fn embed_url(&self) -> String {
        match self {
            Self::Youtube { id } => format!("{YOUTUBE_EMBED_BASE}/{id}?{YOUTUBE_EMBED_PARAMS}"),
            Self::Mp4 { src, .. } | Self::Image { src, .. } => src.clone(),
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        match self {
            Self::Youtube { .. } | Self::Mp4 { .. } => true,
            Self::Image { .. } => false,
        }
    }

    /// Still frame shown before playback.
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        match self {
            Self::Youtube { .. } => None,
            Self::Mp4 { poster, .. } => poster.as_deref(),
            Self::Image { src, .. } => Some(src),
        }
    }
}

// =============================================================================
// CONTENT TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    pub orientation: Orientation,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub included: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramCarousel {
    pub id: String,
    pub title: String,
    pub post_url_key: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoot_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl InstagramCarousel {
    #[must_use]
    pub fn post_url(&self) -> String {
        format!("{INSTAGRAM_POST_BASE}/{}/", self.post_url_key)
    }
}

// =============================================================================
// WIRE VIEWS
// =============================================================================

/// A work item as the grid receives it: the catalog record plus the player
/// fields derived from its media.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCard<'a> {
    #[serde(flatten)]
    pub item: &'a WorkItem,
    pub embed_url: String,
    pub is_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<&'a str>,
}

impl<'a> From<&'a WorkItem> for WorkCard<'a> {
    fn from(item: &'a WorkItem) -> Self {
        Self {
            embed_url: item.media.embed_url(),
            is_video: item.media.is_video(),
            poster: item.media.poster(),
            item,
        }
    }
}

/// A carousel with its resolved Instagram link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselCard<'a> {
    #[serde(flatten)]
    pub carousel: &'a InstagramCarousel,
    pub post_url: String,
}

impl<'a> From<&'a InstagramCarousel> for CarouselCard<'a> {
    fn from(carousel: &'a InstagramCarousel) -> Self {
        Self { post_url: carousel.post_url(), carousel }
    }
}

/// Everything the single-page site renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub hero: HeroContent,
    pub services: Vec<Service>,
    pub process_steps: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
    pub brands: Vec<String>,
    pub work: Vec<WorkItem>,
    pub carousels: Vec<InstagramCarousel>,
}

impl SiteContent {
    /// The compiled-in catalog.
    #[must_use]
    pub fn catalog() -> Self {
        catalog::build()
    }

    #[must_use]
    pub fn work_by_id(&self, id: &str) -> Option<&WorkItem> {
        self.work.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
