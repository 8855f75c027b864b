use std::time::Duration;

#[cfg(debug_assertions)]
pub fn get_config_url() -> &'static str {
    "/config.json" // Served from the trunk dev server root
}

#[cfg(not(debug_assertions))]
pub fn get_config_url() -> &'static str {
    "config.json" // Relative to the deployed page
}

/// Behavioral constants of the page. Content lives in the configuration
/// document; these only shape how it is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Events shown before the list is expanded.
    pub collapsed_event_count: usize,
    /// Upper bound (inclusive) on days-to-go for the upcoming-event notice.
    pub notice_window_days: i64,
    pub notice_delay: Duration,
    pub notice_duration: Duration,
    /// Delay between consecutive gallery items fading in.
    pub gallery_stagger: Duration,
    /// Extra gap kept between the sticky header and a scrolled-to section.
    pub scroll_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    /// Overlay painted on top of the hero background image.
    pub hero_overlay: &'static str,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collapsed_event_count: 3,
            notice_window_days: 7,
            notice_delay: Duration::from_millis(2000),
            notice_duration: Duration::from_millis(8000),
            gallery_stagger: Duration::from_millis(100),
            scroll_offset: 20.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
            hero_overlay: "linear-gradient(rgba(245, 238, 220, 0.9), rgba(255, 255, 255, 0.95))",
        }
    }
}
