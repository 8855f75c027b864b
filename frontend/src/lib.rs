//! Configuration-driven renderer for the studio website.
//!
//! The page markup ships with the site; this crate fetches `config.json`,
//! fills every section through a [`surface::Surface`] and wires the few
//! interactive bits (events toggle, upcoming-event banner, navigation).

pub mod app;
pub mod behaviors;
pub mod config;
pub mod dates;
pub mod dom;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod site;
pub mod surface;

pub mod components {
    pub mod notification;
}

pub mod sections {
    pub mod about;
    pub mod benefits;
    pub mod contact;
    pub mod events;
    pub mod expertise;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod social;
    pub mod testimonials;
}

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{LoadError, RenderError, SurfaceError};
pub use model::SiteConfig;
pub use site::{Page, RenderContext, RenderReport, Site};
