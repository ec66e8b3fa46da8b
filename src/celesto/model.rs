use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Knowledge base root used when the caller does not supply one.
pub const DEFAULT_KB_PATH: &str = "./knowledge_base";

/// Market and unit-economics estimates for an idea. Values are free-form text
/// as produced by the model ("$4.2B", "roughly 3x CAC", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaMetric {
    pub total_addressable_market: String,
    pub serviceable_addressable_market: String,
    pub serviceable_obtainable_market: String,
    pub customer_acquisition_cost: String,
    pub lifetime_value: String,
}

/// One startup proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub market: String,
    pub implementation: String,
    pub assets: Vec<String>,
    pub potential_challenges: Vec<String>,
    pub potential_solutions: Vec<String>,
    pub potential_risks: Vec<String>,
    pub potential_mitigations: Vec<String>,
    pub potential_market_size: String,
    pub metrics: Vec<IdeaMetric>,
}

/// Input to idea generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub topic: String,
    pub kb_path: Option<PathBuf>,
    /// Accepted for CLI compatibility; nothing is dumped yet.
    pub dump_path: Option<PathBuf>,
    pub assets: Vec<String>,
}

impl GenerateOptions {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_kb_path(mut self, kb_path: impl Into<PathBuf>) -> Self {
        self.kb_path = Some(kb_path.into());
        self
    }

    pub fn with_dump_path(mut self, dump_path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(dump_path.into());
        self
    }

    pub fn with_assets(mut self, assets: Vec<String>) -> Self {
        self.assets = assets;
        self
    }

    /// The knowledge base root, falling back to [`DEFAULT_KB_PATH`] when unset
    /// or empty.
    pub fn kb_path(&self) -> PathBuf {
        self.kb_path
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KB_PATH))
    }
}

/// Where a batch of ideas lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaLocation {
    pub kb_path: PathBuf,
    pub folder: PathBuf,
    pub file: PathBuf,
}

impl IdeaLocation {
    /// `<kb_path>/<slug>/ideas_<timestamp_ms>.json`
    pub fn new(kb_path: &Path, slug: &str, timestamp_ms: i64) -> Self {
        let folder = kb_path.join(slug);
        let file = folder.join(format!("ideas_{}.json", timestamp_ms));
        Self {
            kb_path: kb_path.to_path_buf(),
            folder,
            file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_idea;

    #[test]
    fn kb_path_defaults_to_knowledge_base() {
        let options = GenerateOptions::new("AI");
        assert_eq!(options.kb_path(), PathBuf::from("./knowledge_base"));
    }

    #[test]
    fn kb_path_uses_override() {
        let options = GenerateOptions::new("AI").with_kb_path("./custom_kb");
        assert_eq!(options.kb_path(), PathBuf::from("./custom_kb"));
    }

    #[test]
    fn empty_kb_path_falls_back_to_default() {
        let options = GenerateOptions::new("AI").with_kb_path("");
        assert_eq!(options.kb_path(), PathBuf::from(DEFAULT_KB_PATH));
    }

    #[test]
    fn location_layout() {
        let loc = IdeaLocation::new(Path::new("./kb"), "hello_world", 1700000000123);
        assert_eq!(loc.folder, PathBuf::from("./kb/hello_world"));
        assert_eq!(
            loc.file,
            PathBuf::from("./kb/hello_world/ideas_1700000000123.json")
        );
    }

    #[test]
    fn idea_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample_idea("Smart Learning Platform")).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("potentialChallenges"));
        assert!(obj.contains_key("potentialMarketSize"));
        let metric = &value["metrics"][0];
        assert!(metric.get("totalAddressableMarket").is_some());
        assert!(metric.get("lifetimeValue").is_some());
    }
}
