//! Page bootstrap: fetch the configuration once, then render and wire up.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_net::http::Request;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::behaviors;
use crate::config::{self, Settings};
use crate::dom::{self, DomSurface};
use crate::error::{LoadError, SurfaceError};
use crate::model::SiteConfig;
use crate::scheduler::TimeoutScheduler;
use crate::site::{RenderContext, Site};

pub async fn load_site_config(url: &str) -> Result<SiteConfig, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|source| LoadError::Fetch {
            url: url.to_string(),
            source,
        })?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let body = response.text().await.map_err(|source| LoadError::Body {
        url: url.to_string(),
        source,
    })?;
    SiteConfig::from_json(&body)
}

/// Loads the configuration in the background. On failure the page keeps its
/// static shell.
pub fn start() {
    spawn_local(async {
        let url = config::get_config_url();
        match load_site_config(url).await {
            Ok(site_config) => {
                info!("Loaded site configuration from {}", url);
                if let Err(e) = mount(site_config, Settings::default()) {
                    error!("Error rendering page: {}", e);
                }
            }
            Err(e) => error!("Error loading config: {}", e),
        }
    });
}

fn mount(site_config: SiteConfig, settings: Settings) -> Result<(), SurfaceError> {
    let ctx = Rc::new(RenderContext::new(
        Rc::new(RefCell::new(DomSurface::new()?)),
        Rc::new(TimeoutScheduler::new()),
        settings,
        Utc::now(),
    ));

    let page = Site::new(site_config).initialize(&ctx);
    if let Some(board) = page.events {
        if let Err(e) = dom::wire_events_toggle(Rc::clone(&ctx), board) {
            warn!("Events toggle unavailable: {}", e);
        }
    }
    if let Err(e) = dom::wire_toaster_close(page.toaster) {
        warn!("Notification close button unavailable: {}", e);
    }

    behaviors::init_all(&ctx.settings);
    Ok(())
}
