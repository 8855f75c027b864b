//! Events list with its show-more/show-less toggle.

use chrono::{DateTime, Utc};
use log::warn;
use maud::{html, Markup};

use crate::dates::EventDate;
use crate::error::RenderError;
use crate::model::{EventRecord, EventsSection};
use crate::site::RenderContext;
use crate::surface::{Content, Target};

pub const KEY: &str = "events";

/// Visible events plus the collapsed/expanded flag. Only [`toggle`] changes
/// the flag; every render is derived from it.
///
/// [`toggle`]: EventsBoard::toggle
#[derive(Debug, Clone, PartialEq)]
pub struct EventsBoard {
    visible: Vec<EventRecord>,
    collapsed_count: usize,
    expanded: bool,
}

impl EventsBoard {
    pub fn new(section: &EventsSection, collapsed_count: usize) -> Self {
        Self {
            visible: section.visible().cloned().collect(),
            collapsed_count,
            expanded: false,
        }
    }

    pub fn visible(&self) -> &[EventRecord] {
        &self.visible
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Events for the current view, in document order.
    pub fn shown(&self) -> &[EventRecord] {
        if self.expanded {
            &self.visible
        } else {
            &self.visible[..self.visible.len().min(self.collapsed_count)]
        }
    }

    pub fn has_toggle(&self) -> bool {
        self.visible.len() > self.collapsed_count
    }

    pub fn toggle_label(&self) -> String {
        if self.expanded {
            "Show Less".to_string()
        } else {
            format!(
                "Show More Events ({} more)",
                self.visible.len().saturating_sub(self.collapsed_count)
            )
        }
    }

    pub fn markup(&self, now: DateTime<Utc>) -> Markup {
        html! {
            @for event in self.shown() {
                (event_card(event, now))
            }
        }
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<(), RenderError> {
        ctx.markup(Target::EventsList, self.markup(ctx.now))?;
        ctx.text(Target::EventsToggle, self.toggle_label())?;
        ctx.render(
            Target::EventsToggle,
            Content::Style {
                property: "display",
                value: if self.has_toggle() { "inline-block" } else { "none" }.to_string(),
            },
        )?;
        Ok(())
    }
}

/// Returns whether the event starts strictly after `now`. Unparseable dates
/// never count as upcoming.
pub fn is_upcoming(event: &EventRecord, now: DateTime<Utc>) -> bool {
    EventDate::parse(&event.date).map_or(false, |date| date.is_after(now))
}

fn event_card(event: &EventRecord, now: DateTime<Utc>) -> Markup {
    let (formatted, upcoming) = match EventDate::parse(&event.date) {
        Some(date) => (date.long_format(), date.is_after(now)),
        None => {
            warn!("Event {:?} has an unreadable date {:?}", event.title, event.date);
            (event.date.clone(), false)
        }
    };

    html! {
        div class=(if upcoming { "event event--upcoming" } else { "event" }) {
            div class="event__badge" { (event.kind) }
            div class="event__content" {
                h3 class="event__title" { (event.title) }
                div class="event__details" {
                    div class="event__detail" { span { "📅" } " " (formatted) }
                    div class="event__detail" { span { "⏰" } " " (event.time) }
                    div class="event__detail" { span { "📍" } " " (event.location) }
                }
                p class="event__description" { (event.description) }
            }
            div class="event__price" { (event.price.to_string()) }
        }
    }
}

pub fn populate(ctx: &RenderContext, section: &EventsSection) -> Result<EventsBoard, RenderError> {
    ctx.text(Target::EventsTitle, &section.title)?;
    let board = EventsBoard::new(section, ctx.settings.collapsed_event_count);
    board.render(ctx)?;
    Ok(board)
}
