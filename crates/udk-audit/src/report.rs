//! Audit findings

use std::fmt;

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

const EXCERPT_CHARS: usize = 120;

/// The four inconsistency categories the audit detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Inline style hardcodes a color instead of a custom property.
    HardcodedColor,
    /// `<button>` carrying no design system button class.
    NonSystemButton,
    /// Form control without the design system form class.
    NonSystemFormControl,
    /// Inline style hardcodes pixel spacing.
    HardcodedSpacing,
}

impl ViolationKind {
    /// The fixed report message for this category.
    pub fn message(&self) -> &'static str {
        match self {
            Self::HardcodedColor => "Hardcoded color found",
            Self::NonSystemButton => "Button not using design system",
            Self::NonSystemFormControl => "Form element not using design system",
            Self::HardcodedSpacing => "Hardcoded spacing found",
        }
    }
}

/// Owned snapshot of a flagged element.
///
/// Stands in for a live element handle in the report: enough to locate the
/// element in the source without holding the parsed document alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSummary {
    /// Tag name.
    pub tag: String,
    /// `id` attribute, when present.
    pub id: Option<String>,
    /// Classes in attribute order.
    pub classes: Vec<String>,
    /// Raw `style` attribute, when present.
    pub style: Option<String>,
    /// Leading characters of the element's HTML.
    pub excerpt: String,
}

impl ElementSummary {
    /// Snapshot `element`.
    pub fn from_element(element: &ElementRef<'_>) -> Self {
        let value = element.value();
        Self {
            tag: value.name().to_string(),
            id: value.attr("id").map(ToString::to_string),
            // Split the raw attribute to keep the author's ordering.
            classes: value
                .attr("class")
                .map(|classes| classes.split_whitespace().map(ToString::to_string).collect())
                .unwrap_or_default(),
            style: value.attr("style").map(ToString::to_string),
            excerpt: element.html().chars().take(EXCERPT_CHARS).collect(),
        }
    }
}

impl fmt::Display for ElementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{id}\"")?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        write!(f, ">")
    }
}

/// One detected inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Category.
    pub kind: ViolationKind,
    /// The element that triggered it.
    pub element: ElementSummary,
}

/// The result of one audit run.
///
/// Violations are ordered by pass (colors, buttons, form controls, spacing)
/// and by document order within a pass, so two runs over the same input
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    violations: Vec<Violation>,
}

impl AuditReport {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// All violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True when no pass flagged anything.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations in `kind`.
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.kind == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ViolationKind::HardcodedColor.message(), "Hardcoded color found");
        assert_eq!(
            ViolationKind::NonSystemButton.message(),
            "Button not using design system"
        );
        assert_eq!(
            ViolationKind::NonSystemFormControl.message(),
            "Form element not using design system"
        );
        assert_eq!(
            ViolationKind::HardcodedSpacing.message(),
            "Hardcoded spacing found"
        );
    }

    #[test]
    fn test_summary_display() {
        let summary = ElementSummary {
            tag: "button".to_string(),
            id: Some("save".to_string()),
            classes: vec!["wide".to_string(), "red".to_string()],
            style: None,
            excerpt: String::new(),
        };
        assert_eq!(format!("{summary}"), r#"<button id="save" class="wide red">"#);

        let bare = ElementSummary {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            style: None,
            excerpt: String::new(),
        };
        assert_eq!(format!("{bare}"), "<div>");
    }

    #[test]
    fn test_report_counts() {
        let element = ElementSummary {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            style: None,
            excerpt: String::new(),
        };
        let report = AuditReport::new(vec![
            Violation {
                kind: ViolationKind::HardcodedColor,
                element: element.clone(),
            },
            Violation {
                kind: ViolationKind::HardcodedColor,
                element: element.clone(),
            },
            Violation {
                kind: ViolationKind::HardcodedSpacing,
                element,
            },
        ]);
        assert!(!report.is_clean());
        assert_eq!(report.count_of(ViolationKind::HardcodedColor), 2);
        assert_eq!(report.count_of(ViolationKind::HardcodedSpacing), 1);
        assert_eq!(report.count_of(ViolationKind::NonSystemButton), 0);
        assert!(AuditReport::default().is_clean());
    }
}
