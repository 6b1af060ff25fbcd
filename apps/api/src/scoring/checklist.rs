use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One named boolean check within a section checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub name: &'static str,
    pub passed: bool,
}

/// Outcome of one analyzer's checklist. `items` keeps the analyzer's fixed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistResult {
    #[serde(rename = "checklist", serialize_with = "serialize_items")]
    pub items: Vec<ChecklistItem>,
    /// `passed / total * 100`, kept unrounded until report assembly.
    pub score: f64,
    pub recommendations: Vec<String>,
}

impl ChecklistResult {
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.passed)
    }
}

/// Builder that records checks in order and collects a recommendation per failed check.
#[derive(Debug, Default)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    recommendations: Vec<String>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a check without an attached recommendation.
    pub fn check(&mut self, name: &'static str, passed: bool) -> &mut Self {
        self.items.push(ChecklistItem { name, passed });
        self
    }

    /// Records a check; when it fails, `recommendation` is evaluated and kept.
    pub fn check_or(
        &mut self,
        name: &'static str,
        passed: bool,
        recommendation: impl FnOnce() -> String,
    ) -> &mut Self {
        self.items.push(ChecklistItem { name, passed });
        if !passed {
            self.recommendations.push(recommendation());
        }
        self
    }

    /// Adds a recommendation that is not tied to a check.
    pub fn note(&mut self, recommendation: impl Into<String>) -> &mut Self {
        self.recommendations.push(recommendation.into());
        self
    }

    pub fn finish(self) -> ChecklistResult {
        let total = self.items.len();
        let passed = self.items.iter().filter(|item| item.passed).count();
        let score = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };
        ChecklistResult {
            items: self.items,
            score,
            recommendations: self.recommendations,
        }
    }
}

fn serialize_items<S: Serializer>(items: &[ChecklistItem], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(items.len()))?;
    for item in items {
        map.serialize_entry(item.name, &item.passed)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_share_of_passed_items() {
        let mut checklist = Checklist::new();
        checklist
            .check("a", true)
            .check("b", false)
            .check("c", true);
        let result = checklist.finish();
        assert!((result.score - 66.666_666).abs() < 0.001);
        assert_eq!(result.passed("b"), Some(false));
    }

    #[test]
    fn test_recommendation_only_for_failed_checks() {
        let mut checklist = Checklist::new();
        checklist
            .check_or("email", true, || "Add an email".to_string())
            .check_or("phone", false, || "Add a phone".to_string());
        let result = checklist.finish();
        assert_eq!(result.recommendations, vec!["Add a phone"]);
    }

    #[test]
    fn test_empty_checklist_scores_zero() {
        assert_eq!(Checklist::new().finish().score, 0.0);
    }

    #[test]
    fn test_items_serialize_as_ordered_map() {
        let mut checklist = Checklist::new();
        checklist.check("zeta", true).check("alpha", false);
        let json = serde_json::to_string(&checklist.finish()).unwrap();
        assert!(json.starts_with(r#"{"checklist":{"zeta":true,"alpha":false}"#), "{json}");
    }

    #[test]
    fn test_lookup_by_name() {
        let mut checklist = Checklist::new();
        checklist.check("location", false);
        let result = checklist.finish();
        assert_eq!(result.passed("location"), Some(false));
        assert_eq!(result.passed("unknown"), None);
    }
}
