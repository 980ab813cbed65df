//! Audit trace models.
//!
//! Every settlement carries an [`AuditTrace`] recording, in order, each rule
//! the engine applied together with its inputs and outputs, so a reviewer can
//! reproduce any figure on the final statement.

use serde::{Deserialize, Serialize};

/// How serious an audit warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational only.
    Low,
    /// Worth a second look before the statement is issued.
    Medium,
    /// Likely needs manual correction.
    High,
}

/// A single step in the audit trace.
///
/// # Example
///
/// ```
/// use severance_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "notice_period".to_string(),
///     rule_name: "Notice Period".to_string(),
///     clause_ref: "116".to_string(),
///     input: serde_json::json!({"tenure_months": 14}),
///     output: serde_json::json!({"notice_days": 30}),
///     reasoning: "14 months of tenure falls in the 12-24 month band".to_string(),
/// };
/// assert_eq!(step.rule_id, "notice_period");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position of the step in the trace, starting at 1.
    pub step_number: u32,
    /// Machine-readable identifier of the rule.
    pub rule_id: String,
    /// Human-readable rule name.
    pub rule_name: String,
    /// Labour code article the rule implements.
    pub clause_ref: String,
    /// The inputs the rule consumed.
    pub input: serde_json::Value,
    /// The values the rule produced.
    pub output: serde_json::Value,
    /// Plain-language explanation of the outcome.
    pub reasoning: String,
}

/// A condition worth flagging on the statement without failing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// Machine-readable warning code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// How serious the warning is.
    pub severity: WarningSeverity,
}

/// Ordered record of every rule applied during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Steps in the order they were applied.
    pub steps: Vec<AuditStep>,
    /// Warnings raised along the way.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Appends a step, numbering it after the last recorded one.
    pub fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        clause_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            clause_ref: clause_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }

    /// Appends a warning.
    pub fn warn(&mut self, code: &str, message: String, severity: WarningSeverity) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity,
        });
    }

    /// Looks up the first step recorded for a rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}
