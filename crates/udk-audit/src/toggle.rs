//! Debug mode toggle

/// Element id of the injected toggle button.
pub const TOGGLE_ELEMENT_ID: &str = "debug-toggle";

/// Body class the toggle drives.
pub const DEBUG_BODY_CLASS: &str = "debug-mode";

const LABEL_OFF: &str = "\u{1f50d} Debug";
const LABEL_ON: &str = "\u{1f50d} Debug ON";

/// State machine for the page-level debug mode and its toggle button.
///
/// Starts disabled. A click flips the state; the disabled label equals the
/// initial label, so toggling off restores the button text exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugToggle {
    enabled: bool,
}

impl DebugToggle {
    /// Toggle in the disabled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state; returns the new state.
    pub fn click(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Whether debug mode is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Button label for the current state.
    pub fn label(&self) -> &'static str {
        if self.enabled {
            LABEL_ON
        } else {
            LABEL_OFF
        }
    }

    /// Rewrite a body `class` attribute for the current state.
    ///
    /// Other classes keep their order; the debug class appears at most once.
    pub fn class_attr(&self, existing: &str) -> String {
        let mut classes: Vec<&str> = existing
            .split_whitespace()
            .filter(|class| *class != DEBUG_BODY_CLASS)
            .collect();
        if self.enabled {
            classes.push(DEBUG_BODY_CLASS);
        }
        classes.join(" ")
    }

    /// Render the fixed-position toggle button.
    pub fn button_html(&self) -> String {
        format!(
            concat!(
                "<button id=\"{id}\" style=\"position: fixed; bottom: 20px; right: 20px; ",
                "z-index: 9999; padding: 10px; background: #ff6b6b; color: white; ",
                "border: none; border-radius: 4px; cursor: pointer; font-size: 14px;\">",
                "{label}</button>"
            ),
            id = TOGGLE_ELEMENT_ID,
            label = self.label(),
        )
    }

    /// Insert the toggle button into a page.
    ///
    /// There is no duplicate guard: injecting twice duplicates the button.
    /// Hosts inject once per page.
    pub fn inject_into(&self, html: &str) -> String {
        inject_before_body(html, &self.button_html())
    }
}

/// Splice `snippet` in front of the document's last `</body>` tag, matched
/// case-insensitively. Appends to the end when the tag is missing.
pub fn inject_before_body(html: &str, snippet: &str) -> String {
    match html.to_ascii_lowercase().rfind("</body>") {
        Some(idx) => format!("{}{}{}", &html[..idx], snippet, &html[idx..]),
        None => format!("{html}{snippet}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_clicks_restore_initial_state() {
        let mut toggle = DebugToggle::new();
        let initial_label = toggle.label();

        assert!(toggle.click());
        assert!(toggle.is_enabled());
        assert_eq!(toggle.label(), "\u{1f50d} Debug ON");
        assert_eq!(toggle.class_attr("container"), "container debug-mode");

        assert!(!toggle.click());
        assert_eq!(toggle.label(), initial_label);
        assert_eq!(toggle.class_attr("container debug-mode"), "container");
    }

    #[test]
    fn test_class_attr_preserves_other_classes() {
        let mut toggle = DebugToggle::new();
        toggle.click();
        assert_eq!(toggle.class_attr("a  b   c"), "a b c debug-mode");
        // Already present: not duplicated.
        assert_eq!(toggle.class_attr("a debug-mode b"), "a b debug-mode");

        toggle.click();
        assert_eq!(toggle.class_attr("debug-mode"), "");
    }

    #[test]
    fn test_button_html() {
        let toggle = DebugToggle::new();
        let html = toggle.button_html();
        assert!(html.contains(r#"id="debug-toggle""#));
        assert!(html.contains("\u{1f50d} Debug</button>"));
        assert!(html.contains("background: #ff6b6b"));
    }

    #[test]
    fn test_inject_before_closing_body() {
        let toggle = DebugToggle::new();
        let page = "<html><body><p>hi</p></body></html>";
        let injected = toggle.inject_into(page);
        assert_eq!(
            injected,
            format!(
                "<html><body><p>hi</p>{}</body></html>",
                toggle.button_html()
            )
        );
    }

    #[test]
    fn test_inject_matches_body_tag_case_insensitively() {
        let injected = inject_before_body("<BODY>x</BODY>", "<i>s</i>");
        assert_eq!(injected, "<BODY>x<i>s</i></BODY>");
    }

    #[test]
    fn test_inject_appends_without_body_tag() {
        let injected = inject_before_body("<p>fragment</p>", "<i>s</i>");
        assert_eq!(injected, "<p>fragment</p><i>s</i>");
    }

    #[test]
    fn test_inject_twice_duplicates() {
        let toggle = DebugToggle::new();
        let page = toggle.inject_into(&toggle.inject_into("<body></body>"));
        assert_eq!(page.matches(TOGGLE_ELEMENT_ID).count(), 2);
    }
}
