//! Output formatter trait

use termgate_application::{ConfigureConditionOutput, EvaluationOutcome};
use termgate_domain::{CategoryOptions, ResolvedContext, RuntimeContexts};

/// Trait for formatting command results
pub trait OutputFormatter {
    fn format_context(&self, context: &ResolvedContext) -> String;

    fn format_contexts(&self, contexts: &RuntimeContexts) -> String;

    fn format_options(&self, options: &CategoryOptions) -> String;

    fn format_configured(&self, output: &ConfigureConditionOutput) -> String;

    fn format_outcome(&self, outcome: &EvaluationOutcome) -> String;
}
