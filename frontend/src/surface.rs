//! The rendering capability the population routines write through.
//!
//! Routines never look elements up themselves: they name a [`Target`] and
//! hand over a [`Content`]. The browser implementation lives in
//! [`crate::dom`]; [`MemorySurface`] records everything for tests.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::SurfaceError;

pub type SharedSurface = Rc<RefCell<dyn Surface>>;

/// Fixed locations in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Hero,
    HeroTitle,
    HeroSubtitle,
    HeroQuote,
    AboutTitle,
    AboutIntro,
    AboutCards,
    AboutHighlights,
    BenefitsTitle,
    BenefitsGrid,
    ServicesTitle,
    ServicesGrid,
    ExpertiseTitle,
    ExpertiseList,
    GalleryTitle,
    GalleryGrid,
    /// Zero-based position inside the gallery grid.
    GalleryItem(usize),
    EventsTitle,
    EventsList,
    EventsToggle,
    SocialTitle,
    SocialContent,
    TestimonialsTitle,
    TestimonialsGrid,
    ContactTitle,
    ContactDescription,
    ContactMethods,
    ContactActions,
    FooterText,
    Toaster,
    ToasterTitle,
    ToasterMessage,
    ToasterClose,
}

impl Target {
    pub fn selector(&self) -> Cow<'static, str> {
        let selector = match self {
            Target::Hero => ".hero",
            Target::HeroTitle => ".hero__title",
            Target::HeroSubtitle => ".hero__subtitle",
            Target::HeroQuote => ".hero__quote",
            Target::AboutTitle => "#about .section__title",
            Target::AboutIntro => ".about__intro",
            Target::AboutCards => ".about__cards",
            Target::AboutHighlights => ".about__highlights",
            Target::BenefitsTitle => ".benefits .section__title",
            Target::BenefitsGrid => ".benefits__grid",
            Target::ServicesTitle => "#services .section__title",
            Target::ServicesGrid => ".services__grid",
            Target::ExpertiseTitle => ".expertise .section__title",
            Target::ExpertiseList => ".expertise__list",
            Target::GalleryTitle => "#galleryTitle",
            Target::GalleryGrid => "#galleryGrid",
            Target::GalleryItem(index) => {
                return Cow::Owned(format!(
                    "#galleryGrid .gallery__item:nth-child({})",
                    index + 1
                ))
            }
            Target::EventsTitle => "#eventsTitle",
            Target::EventsList => "#eventsList",
            Target::EventsToggle => "#eventsToggle",
            Target::SocialTitle => "#socialTitle",
            Target::SocialContent => "#socialContent",
            Target::TestimonialsTitle => "#testimonialsTitle",
            Target::TestimonialsGrid => "#testimonialsGrid",
            Target::ContactTitle => "#contact .section__title",
            Target::ContactDescription => ".contact__info p",
            Target::ContactMethods => ".contact__methods",
            Target::ContactActions => ".contact__actions",
            Target::FooterText => ".footer p",
            Target::Toaster => "#eventToaster",
            Target::ToasterTitle => "#eventToaster .toaster__title",
            Target::ToasterMessage => "#eventToaster .toaster__message",
            Target::ToasterClose => "#eventToaster .toaster__close",
        };
        Cow::Borrowed(selector)
    }
}

/// What to write into a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, replaces the element's children.
    Text(String),
    /// Markup, replaces the element's children.
    Markup(String),
    Style {
        property: &'static str,
        value: String,
    },
    AddClass(&'static str),
    RemoveClass(&'static str),
}

pub trait Surface {
    fn render(&mut self, target: Target, content: Content) -> Result<(), SurfaceError>;
}

/// In-memory surface that keeps the latest state of every target plus the
/// full log of operations applied to it.
#[derive(Debug, Default)]
pub struct MemorySurface {
    log: Vec<(Target, Content)>,
    children: HashMap<Target, Content>,
    styles: HashMap<(Target, &'static str), String>,
    classes: HashMap<Target, HashSet<&'static str>>,
    missing: HashSet<Target>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Treat `target` as absent from the page.
    pub fn without(mut self, target: Target) -> Self {
        self.missing.insert(target);
        self
    }

    pub fn text(&self, target: Target) -> Option<&str> {
        match self.children.get(&target)? {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn markup(&self, target: Target) -> Option<&str> {
        match self.children.get(&target)? {
            Content::Markup(markup) => Some(markup),
            _ => None,
        }
    }

    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|((t, p), _)| *t == target && *p == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes
            .get(&target)
            .map_or(false, |set| set.contains(class))
    }

    pub fn log(&self) -> &[(Target, Content)] {
        &self.log
    }

    /// Number of operations applied to `target`.
    pub fn writes_to(&self, target: Target) -> usize {
        self.log.iter().filter(|(t, _)| *t == target).count()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Surface for MemorySurface {
    fn render(&mut self, target: Target, content: Content) -> Result<(), SurfaceError> {
        if self.missing.contains(&target) {
            return Err(SurfaceError::MissingTarget(target.selector().into_owned()));
        }
        self.log.push((target, content.clone()));
        match content {
            Content::Text(_) | Content::Markup(_) => {
                self.children.insert(target, content);
            }
            Content::Style { property, value } => {
                self.styles.insert((target, property), value);
            }
            Content::AddClass(class) => {
                self.classes.entry(target).or_default().insert(class);
            }
            Content::RemoveClass(class) => {
                if let Some(set) = self.classes.get_mut(&target) {
                    set.remove(class);
                }
            }
        }
        Ok(())
    }
}
