//! Shared loading-indicator service

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Fixed element id of the overlay markup.
pub const OVERLAY_ELEMENT_ID: &str = "__global_ajax_spinner";

/// How the indicator reacts to overlapping requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorMode {
    /// Show on every request start and hide on every finish.
    ///
    /// With two overlapping requests the indicator disappears as soon as the
    /// first one finishes, even though the other is still in flight. This is
    /// the historical behavior of the wrapper and remains the default.
    #[default]
    PerRequest,
    /// Track an in-flight counter: show on the 0 to 1 transition, hide on
    /// the 1 to 0 transition, so the indicator stays visible until the last
    /// overlapping request finishes.
    Counted,
}

/// Busy indicator shared by every request issued through one
/// [`ApiClient`](crate::ApiClient).
///
/// The overlay markup is rendered lazily, at most once per indicator
/// lifetime, the first time the indicator is shown. [`show`](Self::show) and
/// [`hide`](Self::hide) are directly callable for hosts that drive the
/// indicator outside the request lifecycle.
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    mode: IndicatorMode,
    visible: AtomicBool,
    in_flight: AtomicUsize,
    overlay: OnceLock<String>,
    creations: AtomicUsize,
}

impl LoadingIndicator {
    /// Create an indicator with the given mode.
    pub fn new(mode: IndicatorMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// The configured mode.
    pub fn mode(&self) -> IndicatorMode {
        self.mode
    }

    /// Show the indicator, creating the overlay markup on first use.
    pub fn show(&self) {
        self.ensure_overlay();
        self.visible.store(true, Ordering::SeqCst);
    }

    /// Hide the indicator.
    pub fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    /// Whether the indicator is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// How many times the overlay markup has been built. Stays at one for
    /// the whole indicator lifetime no matter how many requests run.
    pub fn creation_count(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }

    /// The overlay markup as first created (hidden), if it exists yet.
    pub fn created_overlay(&self) -> Option<&str> {
        self.overlay.get().map(String::as_str)
    }

    /// Render the overlay element for the current visibility, for host-page
    /// embedding.
    pub fn overlay_html(&self) -> String {
        render_overlay(self.is_visible())
    }

    /// Request-start transition, driven by the client before each dispatch.
    ///
    /// Exposed so alternative transports can share one indicator.
    pub fn request_started(&self) {
        let previous = self.in_flight.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            IndicatorMode::PerRequest => self.show(),
            IndicatorMode::Counted => {
                if previous == 0 {
                    self.show();
                }
            }
        }
    }

    /// Request-finish transition, driven by the client after each request
    /// settles, on success and on failure alike.
    pub fn request_finished(&self) {
        let previous = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_sub(1))
            })
            .unwrap_or(0);
        match self.mode {
            IndicatorMode::PerRequest => self.hide(),
            IndicatorMode::Counted => {
                if previous == 1 {
                    self.hide();
                }
            }
        }
    }

    fn ensure_overlay(&self) {
        self.overlay.get_or_init(|| {
            self.creations.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("creating loading overlay element");
            render_overlay(false)
        });
    }
}

fn render_overlay(visible: bool) -> String {
    let display = if visible { "flex" } else { "none" };
    format!(
        concat!(
            "<div id=\"{id}\" style=\"position:fixed;z-index:99999;top:0;left:0;right:0;",
            "bottom:0;display:{display};align-items:center;justify-content:center;",
            "background:rgba(0,0,0,0.12)\">",
            "<div style=\"background:#fff;padding:12px 16px;border-radius:8px;",
            "box-shadow:0 6px 18px rgba(0,0,0,0.12);font-weight:600\">Loading...</div>",
            "</div>"
        ),
        id = OVERLAY_ELEMENT_ID,
        display = display,
    )
}
