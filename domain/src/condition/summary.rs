//! Human-readable condition summaries

use super::config::ConditionConfig;
use crate::core::identifiers::CategoryId;

/// Summary shown for a condition with nothing selected
pub const UNCONFIGURED_SUMMARY: &str = "Taxonomy term bundle condition is not configured";

/// Describe `config` using `label` to name each selected bundle.
///
/// Bundles without a label are shown by id.
pub fn summarize(config: &ConditionConfig, label: impl Fn(&CategoryId) -> Option<String>) -> String {
    if !config.is_configured() {
        return UNCONFIGURED_SUMMARY.to_string();
    }

    let names = config
        .bundles
        .iter()
        .map(|id| label(id).unwrap_or_else(|| id.to_string()))
        .collect::<Vec<_>>()
        .join(", ");

    if config.negate {
        format!("Category is not one of: {}", names)
    } else {
        format!("Category is one of: {}", names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(id: &CategoryId) -> Option<String> {
        match id.as_str() {
            "1" => Some("Fruit".to_string()),
            "2" => Some("Veg".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_unconfigured() {
        assert_eq!(summarize(&ConditionConfig::new(), labels), UNCONFIGURED_SUMMARY);
        assert_eq!(
            summarize(&ConditionConfig::new().with_negate(true), labels),
            UNCONFIGURED_SUMMARY
        );
    }

    #[test]
    fn test_one_of() {
        let config = ConditionConfig::new().with_bundles(["1", "2"]);
        assert_eq!(summarize(&config, labels), "Category is one of: Fruit, Veg");
    }

    #[test]
    fn test_not_one_of() {
        let config = ConditionConfig::new().with_bundles(["1"]).with_negate(true);
        assert_eq!(summarize(&config, labels), "Category is not one of: Fruit");
    }

    #[test]
    fn test_unknown_label_falls_back_to_id() {
        let config = ConditionConfig::new().with_bundles(["9"]);
        assert_eq!(summarize(&config, labels), "Category is one of: 9");
    }
}
