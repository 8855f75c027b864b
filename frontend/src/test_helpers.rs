use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::Settings;
use crate::model::{EventRecord, Label};
use crate::scheduler::ManualScheduler;
use crate::site::RenderContext;
use crate::surface::MemorySurface;

/// 2024-06-01T00:00:00Z
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub fn context() -> (RenderContext, Rc<RefCell<MemorySurface>>, Rc<ManualScheduler>) {
    let surface = MemorySurface::shared();
    let scheduler = Rc::new(ManualScheduler::new());
    let ctx = RenderContext::new(surface.clone(), scheduler.clone(), Settings::default(), now());
    (ctx, surface, scheduler)
}

pub fn event(title: &str, date: &str, visible: bool) -> EventRecord {
    EventRecord {
        title: title.to_string(),
        date: date.to_string(),
        time: "7:00 AM".to_string(),
        location: "Studio".to_string(),
        description: format!("{} description", title),
        price: Label::Text("Free".to_string()),
        kind: "Workshop".to_string(),
        is_visible: visible,
    }
}
