//! Browser side of the [`Surface`] capability and the click wiring for the
//! interactive pieces.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, MouseEvent};

use crate::components::notification::Toaster;
use crate::error::SurfaceError;
use crate::sections::events::EventsBoard;
use crate::site::RenderContext;
use crate::surface::{Content, Surface, Target};

pub fn document() -> Result<Document, SurfaceError> {
    window()
        .and_then(|w| w.document())
        .ok_or(SurfaceError::NoDocument)
}

fn js_message(selector: &str, err: JsValue) -> SurfaceError {
    SurfaceError::Dom {
        selector: selector.to_string(),
        message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new() -> Result<Self, SurfaceError> {
        Ok(Self {
            document: document()?,
        })
    }

    fn element(&self, selector: &str) -> Result<Element, SurfaceError> {
        self.document
            .query_selector(selector)
            .map_err(|e| js_message(selector, e))?
            .ok_or_else(|| SurfaceError::MissingTarget(selector.to_string()))
    }
}

impl Surface for DomSurface {
    fn render(&mut self, target: Target, content: Content) -> Result<(), SurfaceError> {
        let selector = target.selector();
        let element = self.element(&selector)?;
        match content {
            Content::Text(text) => element.set_text_content(Some(&text)),
            Content::Markup(markup) => element.set_inner_html(&markup),
            Content::Style { property, value } => {
                let element: HtmlElement = element
                    .dyn_into()
                    .map_err(|_| js_message(&selector, JsValue::from_str("not an HTML element")))?;
                element
                    .style()
                    .set_property(property, &value)
                    .map_err(|e| js_message(&selector, e))?;
            }
            Content::AddClass(class) => element
                .class_list()
                .add_1(class)
                .map_err(|e| js_message(&selector, e))?,
            Content::RemoveClass(class) => element
                .class_list()
                .remove_1(class)
                .map_err(|e| js_message(&selector, e))?,
        }
        Ok(())
    }
}

/// Attaches a click listener for the lifetime of the page.
pub fn on_click<F>(target: Target, mut handler: F) -> Result<(), SurfaceError>
where
    F: FnMut(MouseEvent) + 'static,
{
    let selector = target.selector();
    let element = DomSurface::new()?.element(&selector)?;
    let callback = Closure::wrap(Box::new(move |e: MouseEvent| handler(e)) as Box<dyn FnMut(MouseEvent)>);
    element
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .map_err(|e| js_message(&selector, e))?;
    callback.forget();
    Ok(())
}

/// Re-renders the events list every time the toggle is clicked.
pub fn wire_events_toggle(ctx: Rc<RenderContext>, board: Rc<RefCell<EventsBoard>>) -> Result<(), SurfaceError> {
    on_click(Target::EventsToggle, move |_| {
        let mut board = board.borrow_mut();
        board.toggle();
        let ctx = RenderContext::new(
            Rc::clone(&ctx.surface),
            Rc::clone(&ctx.scheduler),
            ctx.settings.clone(),
            Utc::now(),
        );
        if let Err(e) = board.render(&ctx) {
            error!("Failed to re-render events: {}", e);
        }
    })
}

pub fn wire_toaster_close(toaster: Rc<Toaster>) -> Result<(), SurfaceError> {
    on_click(Target::ToasterClose, move |_| {
        if let Err(e) = toaster.dismiss() {
            warn!("Failed to dismiss notification: {}", e);
        }
    })
}
