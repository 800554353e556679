//! Landmark description page content and its image carousel.

use crate::data::Poi;
use crate::i18n::UiStrings;

/// Failure to open a description or an image.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DescriptionError {
    /// No landmark carries this id.
    #[error("no landmark with id {id} for language {language}")]
    UnknownPoi {
        /// Requested id.
        id: u32,
        /// Active language.
        language: String,
    },
    /// The landmark has fewer images than requested.
    #[error("landmark {id} has no image at position {index}")]
    UnknownImage {
        /// Landmark id.
        id: u32,
        /// Requested carousel position.
        index: usize,
    },
}

/// Ordered images with one active slide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    active: usize,
}

impl Carousel {
    /// Carousel over `images`, first slide active.
    #[must_use]
    pub const fn new(images: Vec<String>) -> Self {
        Self { images, active: 0 }
    }

    /// All slides in order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Position of the active slide.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Reference of the active slide, if any.
    #[must_use]
    pub fn active_image(&self) -> Option<&str> {
        self.images.get(self.active).map(String::as_str)
    }

    /// Advance one slide, wrapping at the end.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.active = (self.active + 1) % self.images.len();
        }
    }

    /// Go back one slide, wrapping at the start.
    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            self.active = if self.active == 0 {
                self.images.len() - 1
            } else {
                self.active - 1
            };
        }
    }
}

/// Rendered description of one landmark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    /// Landmark id.
    pub poi_id: u32,
    /// Landmark title, verbatim.
    pub title: String,
    /// Descriptive text, verbatim.
    pub info: String,
    /// `"<year label>: <year>"`.
    pub year_line: String,
    /// `"<address label>: <address>"`.
    pub address_line: String,
    /// `"<type label>: <type>"`.
    pub type_line: String,
    /// Photo carousel.
    pub carousel: Carousel,
}

/// What: Render a landmark with the labels of the active language.
///
/// Inputs:
/// - `poi`: Landmark record
/// - `strings`: UI strings providing the field labels
///
/// Output:
/// - Description page content with the first image active
#[must_use]
pub fn render_description(poi: &Poi, strings: &UiStrings) -> Description {
    Description {
        poi_id: poi.id,
        title: poi.title.clone(),
        info: poi.info.clone(),
        year_line: format!("{}: {}", strings.year, poi.year),
        address_line: format!("{}: {}", strings.address, poi.location),
        type_line: format!("{}: {}", strings.type_of_building, poi.kind),
        carousel: Carousel::new(poi.images.clone()),
    }
}

/// One carousel image shown full screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmplifiedImage {
    /// Landmark id the image belongs to.
    pub poi_id: u32,
    /// Position in the landmark's carousel.
    pub index: usize,
    /// Image reference (path or URL).
    pub image: String,
}
