//! Consistency scan passes

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::report::{AuditReport, ElementSummary, Violation, ViolationKind};
use crate::style::parse_declarations;
use crate::system::DesignSystem;

static STYLED: Lazy<Selector> = Lazy::new(|| Selector::parse("[style]").expect("valid selector"));
static BUTTONS: Lazy<Selector> = Lazy::new(|| Selector::parse("button").expect("valid selector"));
static FORM_CONTROLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("input, select, textarea").expect("valid selector"));

/// Runs the four consistency passes over a document.
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    system: DesignSystem,
}

impl Auditor {
    /// Auditor with the default vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Auditor with a custom vocabulary.
    pub fn with_system(system: DesignSystem) -> Self {
        Self { system }
    }

    /// The vocabulary in use.
    pub fn system(&self) -> &DesignSystem {
        &self.system
    }

    /// Parse `html` and run all four passes in order.
    ///
    /// The parser is error-recovering, so malformed markup yields whatever
    /// elements could be recovered rather than a failure; an unparseable
    /// document is indistinguishable from a clean one. Each violation is
    /// logged at warn level as it is found, and the full report is returned
    /// for callers that want more than the log stream. The scan holds no
    /// state between runs: the same input always produces the same report.
    pub fn run(&self, html: &str) -> AuditReport {
        tracing::info!("Running design consistency checks");

        let document = Html::parse_document(html);
        let mut violations = Vec::new();

        self.scan_colors(&document, &mut violations);
        self.scan_buttons(&document, &mut violations);
        self.scan_form_controls(&document, &mut violations);
        self.scan_spacing(&document, &mut violations);

        tracing::info!(
            violations = violations.len(),
            "Design consistency checks complete"
        );

        AuditReport::new(violations)
    }

    /// Elements whose inline style sets a color-related property to a
    /// hardcoded value. One violation per element, however many
    /// declarations offend.
    fn scan_colors(&self, document: &Html, violations: &mut Vec<Violation>) {
        for element in document.select(&STYLED) {
            if let Some(style) = element.value().attr("style") {
                let hardcoded = parse_declarations(style).iter().any(|decl| {
                    (decl.property.contains("color") || decl.property.contains("background"))
                        && self.system.is_hardcoded_color(&decl.value)
                });
                if hardcoded {
                    flag(violations, ViolationKind::HardcodedColor, &element);
                }
            }
        }
    }

    /// `<button>` elements carrying neither a recognized button class nor
    /// the generic fallback class.
    fn scan_buttons(&self, document: &Html, violations: &mut Vec<Violation>) {
        for element in document.select(&BUTTONS) {
            let classes: Vec<&str> = element.value().classes().collect();
            if classes.iter().any(|class| self.system.is_button_class(class)) {
                continue;
            }
            if !classes.contains(&self.system.generic_button_class.as_str()) {
                flag(violations, ViolationKind::NonSystemButton, &element);
            }
        }
    }

    /// `<input>`, `<select>`, `<textarea>` elements without the form
    /// control class. The alternative class is honored on inputs only.
    fn scan_form_controls(&self, document: &Html, violations: &mut Vec<Violation>) {
        for element in document.select(&FORM_CONTROLS) {
            let value = element.value();
            let classes: Vec<&str> = value.classes().collect();
            if classes.contains(&self.system.form_control_class.as_str()) {
                continue;
            }
            if value.name() == "input"
                && classes.contains(&self.system.input_alternative_class.as_str())
            {
                continue;
            }
            flag(violations, ViolationKind::NonSystemFormControl, &element);
        }
    }

    /// Elements whose inline style sets a margin or padding property to a
    /// pixel value.
    fn scan_spacing(&self, document: &Html, violations: &mut Vec<Violation>) {
        for element in document.select(&STYLED) {
            if let Some(style) = element.value().attr("style") {
                let hardcoded = parse_declarations(style).iter().any(|decl| {
                    (decl.property.contains("margin") || decl.property.contains("padding"))
                        && self.system.is_hardcoded_spacing(&decl.value)
                });
                if hardcoded {
                    flag(violations, ViolationKind::HardcodedSpacing, &element);
                }
            }
        }
    }
}

fn flag(violations: &mut Vec<Violation>, kind: ViolationKind, element: &ElementRef<'_>) {
    let element = ElementSummary::from_element(element);
    tracing::warn!(%element, "Design inconsistency: {}", kind.message());
    violations.push(Violation { kind, element });
}

/// Run the consistency checks over `html` with the default vocabulary.
///
/// The manual entry point for one-off checks; equivalent to
/// `Auditor::new().run(html)`.
pub fn check_design_consistency(html: &str) -> AuditReport {
    Auditor::new().run(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_violation_per_element_per_pass() {
        let report = check_design_consistency(
            r#"<div style="color: #f00; background: rgb(0,0,0)">x</div>"#,
        );
        assert_eq!(report.count_of(ViolationKind::HardcodedColor), 1);
        assert_eq!(report.violations().len(), 1);
    }

    #[test]
    fn test_passes_are_independent() {
        // One element can be flagged by the color pass and the spacing pass.
        let report =
            check_design_consistency(r#"<div style="color: #f00; margin: 10px">x</div>"#);
        assert_eq!(report.count_of(ViolationKind::HardcodedColor), 1);
        assert_eq!(report.count_of(ViolationKind::HardcodedSpacing), 1);
        assert_eq!(report.violations().len(), 2);
    }

    #[test]
    fn test_violations_in_pass_order() {
        let report = check_design_consistency(
            r#"<button>b</button><div style="color: #f00">x</div>"#,
        );
        let kinds: Vec<ViolationKind> = report
            .violations()
            .iter()
            .map(|violation| violation.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ViolationKind::HardcodedColor, ViolationKind::NonSystemButton]
        );
    }

    #[test]
    fn test_color_property_without_color_value_is_clean() {
        let report = check_design_consistency(r#"<div style="color: red">x</div>"#);
        assert!(report.is_clean());
    }

    #[test]
    fn test_spacing_pass_ignores_non_spacing_pixels() {
        // Pixel values outside margin/padding declarations are not spacing.
        let report = check_design_consistency(r#"<div style="width: 100px">x</div>"#);
        assert_eq!(report.count_of(ViolationKind::HardcodedSpacing), 0);
    }

    #[test]
    fn test_input_alternative_class_is_input_only() {
        let report = check_design_consistency(
            r#"<input class="form-input-new"><select class="form-input-new"></select>"#,
        );
        assert_eq!(report.count_of(ViolationKind::NonSystemFormControl), 1);
        assert_eq!(report.violations()[0].element.tag, "select");
    }

    #[test]
    fn test_custom_vocabulary() {
        let system = DesignSystem {
            button_classes: vec!["action".to_string()],
            ..DesignSystem::default()
        };
        let auditor = Auditor::with_system(system);
        let report = auditor
            .run(r#"<button class="action">a</button><button class="btn-primary">b</button>"#);
        assert_eq!(report.count_of(ViolationKind::NonSystemButton), 1);
        assert_eq!(
            report.violations()[0].element.classes,
            vec!["btn-primary".to_string()]
        );
    }
}
