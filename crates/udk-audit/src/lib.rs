//! Design-system consistency auditing for HTML documents.
//!
//! This crate parses a document and runs four scan passes over it: hardcoded
//! colors in inline styles, `<button>` elements outside the design system,
//! form controls outside the design system, and hardcoded pixel spacing.
//! Every finding is logged through `tracing` and collected into an
//! [`AuditReport`] for callers that want more than the log stream.
//!
//! The crate also ships the debug-mode toggle that pages use to highlight
//! the findings visually: a small state machine plus the markup injection
//! helpers.
//!
//! # Example
//!
//! ```
//! use udk_audit::check_design_consistency;
//!
//! let report = check_design_consistency(
//!     r#"<button class="btn-primary">Save</button>
//!        <div style="color: #ff0000">alert</div>"#,
//! );
//! assert_eq!(report.violations().len(), 1);
//! ```

mod audit;
mod report;
mod style;
mod system;
mod toggle;

pub use audit::{check_design_consistency, Auditor};
pub use report::{AuditReport, ElementSummary, Violation, ViolationKind};
pub use style::{parse_declarations, Declaration};
pub use system::DesignSystem;
pub use toggle::{inject_before_body, DebugToggle, DEBUG_BODY_CLASS, TOGGLE_ELEMENT_ID};
