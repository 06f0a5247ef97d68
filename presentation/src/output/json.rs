//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use serde::Serialize;
use termgate_application::{ConfigureConditionOutput, EvaluationOutcome};
use termgate_domain::{CategoryId, CategoryOptions, ConditionConfig, ResolvedContext, RuntimeContexts};

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

#[derive(Serialize)]
struct ConfiguredView<'a> {
    config: &'a ConditionConfig,
    dropped: &'a [CategoryId],
    summary: &'a str,
}

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_context(&self, context: &ResolvedContext) -> String {
        Self::to_json(context)
    }

    fn format_contexts(&self, contexts: &RuntimeContexts) -> String {
        Self::to_json(contexts)
    }

    fn format_options(&self, options: &CategoryOptions) -> String {
        Self::to_json(options)
    }

    fn format_configured(&self, output: &ConfigureConditionOutput) -> String {
        Self::to_json(&ConfiguredView {
            config: &output.config,
            dropped: &output.dropped,
            summary: &output.summary,
        })
    }

    fn format_outcome(&self, outcome: &EvaluationOutcome) -> String {
        Self::to_json(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termgate_domain::{CacheMetadata, Category, ContextDefinition, Entity};

    #[test]
    fn test_context_json() {
        let context = ResolvedContext::present(
            ContextDefinition::new("entity:taxonomy_term", "Current Taxonomy Term"),
            Entity::term("10", "Apple", "1"),
            CacheMetadata::new().with_context("taxonomy_term"),
        );
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_context(&context)).unwrap();
        assert_eq!(value["value"]["label"], "Apple");
        assert_eq!(value["cacheability"]["contexts"][0], "taxonomy_term");
    }

    #[test]
    fn test_options_json_is_array() {
        let options = CategoryOptions::from_catalog(vec![Category::new("1", "Fruit")]);
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_options(&options)).unwrap();
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[0]["label"], "Fruit");
    }
}
