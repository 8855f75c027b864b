//! Typed view of the site configuration document.
//!
//! The document is kept as a raw JSON object and each section is decoded on
//! demand, so a missing or malformed section only fails the routine that
//! reads it.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{LoadError, RenderError};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    sections: Map<String, Value>,
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let sections: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self { sections })
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let sections: Map<String, Value> = serde_json::from_value(value)?;
        Ok(Self { sections })
    }

    pub fn has_section(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// Decodes the section stored under `key`.
    pub fn section<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, RenderError> {
        let raw = self
            .sections
            .get(key)
            .ok_or(RenderError::MissingSection(key))?;
        T::deserialize(raw).map_err(|source| RenderError::InvalidSection { key, source })
    }
}

/// A display value the document may give either as a string or a number
/// (e.g. `"500+"` or `12`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(serde_json::Number),
}

impl Label {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Label::Text(text) => text.trim().parse().ok(),
            Label::Number(number) => number.as_f64(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    /// Trusted markup, inserted as-is.
    pub quote: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutCard {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub number: Label,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub intro: String,
    pub cards: Vec<AboutCard>,
    pub highlights: Vec<Highlight>,
}

/// Title + description pair shared by benefits, services and expertise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemsSection {
    pub title: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GallerySection {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub price: Label,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventsSection {
    pub title: String,
    pub items: Vec<EventRecord>,
}

impl EventsSection {
    pub fn visible(&self) -> impl Iterator<Item = &EventRecord> {
        self.items.iter().filter(|event| event.is_visible)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instagram {
    pub description: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialSection {
    pub title: String,
    pub instagram: Instagram,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub name: String,
    /// Star count. Fractions and numeric strings are accepted.
    pub rating: Label,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestimonialsSection {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhatsApp {
    pub number: String,
    pub message: String,
}

fn default_booking_subject() -> String {
    "Yoga Session Booking".to_string()
}

fn default_inquiry_subject() -> String {
    "Yoga Inquiry".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: WhatsApp,
    #[serde(default = "default_booking_subject")]
    pub booking_subject: String,
    #[serde(default = "default_inquiry_subject")]
    pub inquiry_subject: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Credit {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterSection {
    pub owner: String,
    #[serde(default)]
    pub credit: Option<Credit>,
}
