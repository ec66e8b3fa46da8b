use crate::error::{CelestoError, Result};
use crate::model::{Idea, IdeaMetric};
use crate::provider::{GenerationRequest, IdeaProvider};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory outlives the test
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }
}

pub fn sample_idea(title: &str) -> Idea {
    Idea {
        title: title.to_string(),
        description: format!("{} explained in one paragraph", title),
        market: "Small and medium businesses".to_string(),
        implementation: "Mobile app backed by a managed ML service".to_string(),
        assets: vec!["Domain expertise".to_string()],
        potential_challenges: vec!["Data privacy".to_string()],
        potential_solutions: vec!["On-device processing".to_string()],
        potential_risks: vec!["Regulatory change".to_string()],
        potential_mitigations: vec!["Compliance review each quarter".to_string()],
        potential_market_size: "$12B".to_string(),
        metrics: vec![IdeaMetric {
            total_addressable_market: "$12B".to_string(),
            serviceable_addressable_market: "$3B".to_string(),
            serviceable_obtainable_market: "$150M".to_string(),
            customer_acquisition_cost: "$40".to_string(),
            lifetime_value: "$600".to_string(),
        }],
    }
}

pub fn sample_ideas() -> Vec<Idea> {
    vec![
        sample_idea("AI-Powered Health Monitor"),
        sample_idea("Smart Learning Platform"),
    ]
}

/// Provider double: answers every request with a canned outcome and keeps
/// the requests it saw.
pub struct StaticProvider {
    outcome: std::result::Result<Vec<Idea>, String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StaticProvider {
    pub fn returning(ideas: Vec<Idea>) -> Self {
        Self {
            outcome: Ok(ideas),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IdeaProvider for StaticProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Idea>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone().map_err(CelestoError::Provider)
    }
}
