//! Runs every section routine against one configuration snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use maud::Markup;
use serde::de::DeserializeOwned;

use crate::components::notification::{schedule_upcoming_notice, Toaster};
use crate::config::Settings;
use crate::error::{RenderError, SurfaceError};
use crate::model::{
    AboutSection, ContactSection, EventsSection, FooterSection, GallerySection, HeroSection,
    ItemsSection, SiteConfig, SocialSection, TestimonialsSection,
};
use crate::scheduler::Scheduler;
use crate::sections::events::EventsBoard;
use crate::sections::{
    about, benefits, contact, events, expertise, footer, gallery, hero, services, social,
    testimonials,
};
use crate::surface::{Content, SharedSurface, Target};

/// Report entry for scheduling the upcoming-event notification.
pub const NOTICE_KEY: &str = "notification";

/// Everything a routine needs besides its own section.
pub struct RenderContext {
    pub surface: SharedSurface,
    pub scheduler: Rc<dyn Scheduler>,
    pub settings: Settings,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    pub fn new(
        surface: SharedSurface,
        scheduler: Rc<dyn Scheduler>,
        settings: Settings,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            surface,
            scheduler,
            settings,
            now,
        }
    }

    pub fn render(&self, target: Target, content: Content) -> Result<(), SurfaceError> {
        self.surface.borrow_mut().render(target, content)
    }

    pub fn text(&self, target: Target, text: impl Into<String>) -> Result<(), SurfaceError> {
        self.render(target, Content::Text(text.into()))
    }

    pub fn markup(&self, target: Target, markup: Markup) -> Result<(), SurfaceError> {
        self.render(target, Content::Markup(markup.into_string()))
    }
}

/// Outcome of one routine.
#[derive(Debug)]
pub struct SectionOutcome {
    pub key: &'static str,
    pub result: Result<(), RenderError>,
}

#[derive(Debug, Default)]
pub struct RenderReport {
    outcomes: Vec<SectionOutcome>,
}

impl RenderReport {
    fn record(&mut self, key: &'static str, result: Result<(), RenderError>) {
        match &result {
            Ok(()) => debug!("Rendered section {}", key),
            Err(e) => error!("Section {} failed: {}", key, e),
        }
        self.outcomes.push(SectionOutcome { key, result });
    }

    pub fn outcomes(&self) -> &[SectionOutcome] {
        &self.outcomes
    }

    pub fn rendered(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .map(|outcome| outcome.key)
    }

    pub fn failures(&self) -> impl Iterator<Item = &SectionOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Handles the browser layer needs after the first render.
pub struct Page {
    pub report: RenderReport,
    pub events: Option<Rc<RefCell<EventsBoard>>>,
    pub toaster: Rc<Toaster>,
}

pub struct Site {
    config: SiteConfig,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Populates every section in page order. A failing routine is recorded
    /// in the report and the remaining routines still run.
    pub fn initialize(&self, ctx: &RenderContext) -> Page {
        let mut report = RenderReport::default();

        report.record(hero::KEY, self.run(hero::KEY, |s: HeroSection| hero::populate(ctx, &s)));
        report.record(about::KEY, self.run(about::KEY, |s: AboutSection| about::populate(ctx, &s)));
        report.record(
            benefits::KEY,
            self.run(benefits::KEY, |s: ItemsSection| benefits::populate(ctx, &s)),
        );
        report.record(
            services::KEY,
            self.run(services::KEY, |s: ItemsSection| services::populate(ctx, &s)),
        );
        report.record(
            expertise::KEY,
            self.run(expertise::KEY, |s: ItemsSection| expertise::populate(ctx, &s)),
        );
        report.record(
            gallery::KEY,
            self.run(gallery::KEY, |s: GallerySection| gallery::populate(ctx, &s)),
        );

        let mut board = None;
        let events_result = self.run(events::KEY, |s: EventsSection| {
            board = Some(events::populate(ctx, &s)?);
            Ok(())
        });
        report.record(events::KEY, events_result);

        report.record(social::KEY, self.run(social::KEY, |s: SocialSection| social::populate(ctx, &s)));
        report.record(
            testimonials::KEY,
            self.run(testimonials::KEY, |s: TestimonialsSection| testimonials::populate(ctx, &s)),
        );
        report.record(
            contact::KEY,
            self.run(contact::KEY, |s: ContactSection| contact::populate(ctx, &s)),
        );

        if self.config.has_section(footer::KEY) {
            report.record(
                footer::KEY,
                self.run(footer::KEY, |s: FooterSection| footer::populate(ctx, &s)),
            );
        }

        let toaster = Toaster::new(
            Rc::clone(&ctx.surface),
            Rc::clone(&ctx.scheduler),
            ctx.settings.notice_duration,
        );
        // Decoded on its own so a failed events list still gets its notice.
        let notice_result = self.run(events::KEY, |s: EventsSection| {
            let visible: Vec<_> = s.visible().cloned().collect();
            schedule_upcoming_notice(ctx, &toaster, &visible);
            Ok(())
        });
        report.record(NOTICE_KEY, notice_result);

        info!(
            "Rendered {} of {} sections",
            report.rendered().count(),
            report.outcomes().len()
        );

        Page {
            report,
            events: board.map(|board| Rc::new(RefCell::new(board))),
            toaster,
        }
    }

    fn run<T, F>(&self, key: &'static str, populate: F) -> Result<(), RenderError>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Result<(), RenderError>,
    {
        let section = self.config.section::<T>(key)?;
        populate(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::test_helpers::{context, now};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn missing_section_does_not_stop_the_rest() {
        let config = SiteConfig::from_value(json!({
            "hero": {
                "title": "Yoga",
                "subtitle": "Breathe",
                "quote": "Be here",
                "backgroundImage": "hero.jpg"
            },
            "benefits": { "title": "Benefits", "items": [] }
        }))
        .unwrap();
        let (ctx, surface, _) = context();
        let page = Site::new(config).initialize(&ctx);

        let rendered: Vec<_> = page.report.rendered().collect();
        assert_eq!(rendered, ["hero", "benefits"]);
        assert!(!page.report.is_complete());
        assert!(page.events.is_none());
        assert_eq!(surface.borrow().text(Target::BenefitsTitle), Some("Benefits"));

        let failed: Vec<_> = page.report.failures().map(|f| f.key).collect();
        assert_eq!(
            failed,
            [
                "about",
                "services",
                "expertise",
                "gallery",
                "events",
                "social",
                "testimonials",
                "contact",
                "notification"
            ]
        );
    }

    #[test]
    fn absent_target_only_fails_its_own_routine() {
        let config = SiteConfig::from_value(json!({
            "benefits": { "title": "Benefits", "items": [] },
            "services": { "title": "Services", "items": [] }
        }))
        .unwrap();
        let surface = Rc::new(RefCell::new(
            crate::surface::MemorySurface::new().without(Target::BenefitsGrid),
        ));
        let ctx = RenderContext::new(
            surface.clone(),
            Rc::new(ManualScheduler::new()),
            Settings::default(),
            now(),
        );
        let page = Site::new(config).initialize(&ctx);

        let benefits = page
            .report
            .outcomes()
            .iter()
            .find(|o| o.key == "benefits")
            .unwrap();
        assert!(matches!(
            benefits.result,
            Err(RenderError::Surface(SurfaceError::MissingTarget(_)))
        ));
        assert_eq!(surface.borrow().text(Target::ServicesTitle), Some("Services"));
    }

    #[test]
    fn footer_is_optional() {
        let config = SiteConfig::from_value(json!({})).unwrap();
        let (ctx, _, _) = context();
        let page = Site::new(config).initialize(&ctx);
        assert!(page.report.outcomes().iter().all(|o| o.key != "footer"));
    }

    #[test]
    fn notice_survives_a_failed_events_list() {
        let config = SiteConfig::from_value(json!({
            "events": {
                "title": "Events",
                "items": [{
                    "title": "Sunrise Flow",
                    "date": "2024-06-04",
                    "time": "6:30 AM",
                    "location": "Studio",
                    "type": "Class",
                    "price": "Free",
                    "description": "Gentle start",
                    "isVisible": true
                }]
            }
        }))
        .unwrap();
        let surface = Rc::new(RefCell::new(
            crate::surface::MemorySurface::new().without(Target::EventsToggle),
        ));
        let scheduler = Rc::new(ManualScheduler::new());
        let ctx = RenderContext::new(
            surface.clone(),
            scheduler.clone(),
            Settings::default(),
            now(),
        );
        let page = Site::new(config).initialize(&ctx);

        let outcome = |key: &str| {
            page.report
                .outcomes()
                .iter()
                .find(|o| o.key == key)
                .map(|o| o.result.is_ok())
        };
        assert_eq!(outcome("events"), Some(false));
        assert_eq!(outcome(NOTICE_KEY), Some(true));

        scheduler.advance(Duration::from_secs(2));
        assert!(page.toaster.is_visible());
        assert_eq!(
            surface.borrow().text(Target::ToasterTitle),
            Some("Upcoming: Sunrise Flow")
        );
    }
}
