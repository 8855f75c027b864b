//! Upcoming-event banner.
//!
//! The banner markup already exists on the page (`#eventToaster`); showing it
//! fills in the title and message and adds the `show` class. It hides itself
//! after a while unless the visitor closes it first.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, error, info};

use crate::dates::EventDate;
use crate::error::RenderError;
use crate::model::EventRecord;
use crate::scheduler::{Scheduler, TimerId};
use crate::site::RenderContext;
use crate::surface::{Content, SharedSurface, Target};

pub struct Toaster {
    surface: SharedSurface,
    scheduler: Rc<dyn Scheduler>,
    auto_hide: Duration,
    visible: Cell<bool>,
    pending_hide: Cell<Option<TimerId>>,
    this: Weak<Toaster>,
}

impl Toaster {
    pub fn new(surface: SharedSurface, scheduler: Rc<dyn Scheduler>, auto_hide: Duration) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            surface,
            scheduler,
            auto_hide,
            visible: Cell::new(false),
            pending_hide: Cell::new(None),
            this: this.clone(),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn show(&self, title: &str, message: &str) -> Result<(), RenderError> {
        self.cancel_pending();
        {
            let mut surface = self.surface.borrow_mut();
            surface.render(Target::ToasterTitle, Content::Text(title.to_string()))?;
            surface.render(Target::ToasterMessage, Content::Text(message.to_string()))?;
            surface.render(Target::Toaster, Content::AddClass("show"))?;
        }
        self.visible.set(true);

        let this = self.this.clone();
        let id = self.scheduler.schedule(
            self.auto_hide,
            Box::new(move || {
                if let Some(toaster) = this.upgrade() {
                    toaster.pending_hide.set(None);
                    if let Err(e) = toaster.hide() {
                        error!("Failed to hide notification: {}", e);
                    }
                }
            }),
        );
        self.pending_hide.set(Some(id));
        Ok(())
    }

    /// Closes the banner and drops the pending auto-hide. Closing a hidden
    /// banner does nothing.
    pub fn dismiss(&self) -> Result<(), RenderError> {
        self.cancel_pending();
        self.hide()
    }

    fn hide(&self) -> Result<(), RenderError> {
        if !self.visible.replace(false) {
            return Ok(());
        }
        self.surface
            .borrow_mut()
            .render(Target::Toaster, Content::RemoveClass("show"))?;
        Ok(())
    }

    fn cancel_pending(&self) {
        if let Some(id) = self.pending_hide.take() {
            self.scheduler.cancel(id);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingEvent<'a> {
    pub event: &'a EventRecord,
    pub days_left: i64,
}

impl UpcomingEvent<'_> {
    pub fn title(&self) -> String {
        format!("Upcoming: {}", self.event.title)
    }

    pub fn message(&self) -> String {
        let plural = if self.days_left > 1 { "s" } else { "" };
        format!(
            "{} day{} to go! {} at {}",
            self.days_left, plural, self.event.date, self.event.time
        )
    }
}

/// First visible event, in list order, starting within `window_days`.
/// Events that already started (or start right now) never qualify.
pub fn find_upcoming(
    events: &[EventRecord],
    now: DateTime<Utc>,
    window_days: i64,
) -> Option<UpcomingEvent<'_>> {
    events
        .iter()
        .filter(|event| event.is_visible)
        .find_map(|event| {
            let days_left = EventDate::parse(&event.date)?.days_until(now);
            (days_left > 0 && days_left <= window_days).then_some(UpcomingEvent { event, days_left })
        })
}

/// Schedules the banner for the first upcoming event, if any.
pub fn schedule_upcoming_notice(
    ctx: &RenderContext,
    toaster: &Rc<Toaster>,
    events: &[EventRecord],
) -> Option<TimerId> {
    let Some(upcoming) = find_upcoming(events, ctx.now, ctx.settings.notice_window_days) else {
        debug!("No upcoming event within {} days", ctx.settings.notice_window_days);
        return None;
    };
    info!(
        "Announcing {:?} in {} day(s)",
        upcoming.event.title, upcoming.days_left
    );

    let title = upcoming.title();
    let message = upcoming.message();
    let toaster = Rc::clone(toaster);
    let id = ctx.scheduler.schedule(
        ctx.settings.notice_delay,
        Box::new(move || {
            if let Err(e) = toaster.show(&title, &message) {
                error!("Failed to show notification: {}", e);
            }
        }),
    );
    Some(id)
}
