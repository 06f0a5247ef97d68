//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use termgate_application::{ConfigureConditionOutput, EvaluationOutcome};
use termgate_domain::{CacheMetadata, CategoryOptions, ResolvedContext, RuntimeContexts};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn context_block(name: Option<&str>, context: &ResolvedContext) -> String {
        let mut output = String::new();
        let definition = context.definition();

        let title = match name {
            Some(name) => format!("{} ({})", definition.label, name),
            None => definition.label.clone(),
        };
        output.push_str(&format!("{} {}\n", title.cyan().bold(), definition.data_type.dimmed()));

        match context.entity() {
            Some(entity) => output.push_str(&format!(
                "  {} {} {} (bundle {})\n",
                "value:".bold(),
                entity.cache_tag(),
                entity.label,
                entity.bundle
            )),
            None => output.push_str(&format!("  {} {}\n", "value:".bold(), "absent".yellow())),
        }

        output.push_str(&Self::cache_lines(context.cacheability()));
        output
    }

    fn cache_lines(cacheability: &CacheMetadata) -> String {
        let contexts: Vec<&str> = cacheability.contexts().collect();
        let tags: Vec<&str> = cacheability.tags().collect();
        format!(
            "  {} {}\n  {} {}\n  {} {}\n",
            "cache contexts:".dimmed(),
            Self::list_or_none(&contexts),
            "cache tags:".dimmed(),
            Self::list_or_none(&tags),
            "max-age:".dimmed(),
            cacheability.max_age()
        )
    }

    fn list_or_none(items: &[&str]) -> String {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_context(&self, context: &ResolvedContext) -> String {
        Self::context_block(None, context)
    }

    fn format_contexts(&self, contexts: &RuntimeContexts) -> String {
        if contexts.is_empty() {
            return format!("{}\n", "No contexts available".yellow());
        }
        contexts
            .iter()
            .map(|(name, context)| Self::context_block(Some(name), context))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_options(&self, options: &CategoryOptions) -> String {
        if options.is_empty() {
            return format!("{}\n", "No categories in catalog".yellow());
        }
        let mut output = format!("{}\n", "Available bundles:".cyan().bold());
        for category in options.iter() {
            output.push_str(&format!("  [{}] {}\n", category.id, category.label));
        }
        output
    }

    fn format_configured(&self, output: &ConfigureConditionOutput) -> String {
        let mut text = format!("{} {}\n", "Saved:".green().bold(), output.summary);
        if !output.dropped.is_empty() {
            let dropped: Vec<String> = output.dropped.iter().map(|id| id.to_string()).collect();
            text.push_str(&format!(
                "{} {}\n",
                "Ignored unknown bundles:".yellow(),
                dropped.join(", ")
            ));
        }
        text
    }

    fn format_outcome(&self, outcome: &EvaluationOutcome) -> String {
        let verdict = if outcome.matched {
            "MATCH".green().bold()
        } else {
            "NO MATCH".red().bold()
        };

        let mut output = format!("{} {}\n", "Condition:".cyan().bold(), outcome.instance_id);
        output.push_str(&format!("  {}\n", outcome.summary));
        output.push_str(&format!("{} {}\n", "Verdict:".cyan().bold(), verdict));
        if !outcome.stale.is_empty() {
            let stale: Vec<String> = outcome.stale.iter().map(|id| id.to_string()).collect();
            output.push_str(&format!("{} {}\n", "Stale bundles ignored:".yellow(), stale.join(", ")));
        }
        output.push('\n');
        output.push_str(&Self::context_block(None, &outcome.context));
        output.push_str(&format!("{}\n", "Verdict cacheability:".dimmed()));
        output.push_str(&Self::cache_lines(&outcome.cacheability));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termgate_domain::{Category, ContextDefinition, Entity};

    fn plain() {
        colored::control::set_override(false);
    }

    fn definition() -> ContextDefinition {
        ContextDefinition::new("entity:taxonomy_term", "Current Taxonomy Term")
    }

    #[test]
    fn test_absent_context_text() {
        plain();
        let context = ResolvedContext::absent(definition(), CacheMetadata::new().with_context("taxonomy_term"));
        let text = ConsoleFormatter.format_context(&context);
        assert!(text.contains("Current Taxonomy Term"));
        assert!(text.contains("absent"));
        assert!(text.contains("cache contexts: taxonomy_term"));
        assert!(text.contains("cache tags: (none)"));
    }

    #[test]
    fn test_present_context_text() {
        plain();
        let context = ResolvedContext::present(
            definition(),
            Entity::term("10", "Apple", "1"),
            CacheMetadata::new().with_tag("taxonomy_term:10"),
        );
        let text = ConsoleFormatter.format_context(&context);
        assert!(text.contains("taxonomy_term:10 Apple (bundle 1)"));
    }

    #[test]
    fn test_options_text() {
        plain();
        let options = CategoryOptions::from_catalog(vec![Category::new("2", "Veg"), Category::new("1", "Fruit")]);
        let text = ConsoleFormatter.format_options(&options);
        let fruit = text.find("Fruit").unwrap();
        let veg = text.find("Veg").unwrap();
        assert!(fruit < veg);
    }
}
