use crate::commands::CmdResult;
use crate::error::{CelestoError, Result};
use crate::model::{GenerateOptions, Idea, IdeaLocation};
use crate::narrate::Narrator;
use crate::provider::{GenerationRequest, IdeaProvider};
use crate::slug::to_underscore_case;
use crate::store::IdeaStore;
use chrono::Utc;
use std::path::PathBuf;

/// Prefix of the message reported when persisting fails.
pub const STORE_ERROR_PREFIX: &str = "Error storing ideas:";

/// Generates ideas for `options.topic` and files them in the knowledge base.
///
/// Only input and provider failures are returned as errors. A failed write is
/// narrated as `Error storing ideas: ...` and the result comes back without a
/// `stored_path`.
pub async fn run<P, S, N>(
    provider: &P,
    store: &S,
    narrator: &N,
    options: &GenerateOptions,
) -> Result<CmdResult>
where
    P: IdeaProvider + ?Sized,
    S: IdeaStore + ?Sized,
    N: Narrator + ?Sized,
{
    let topic = options.topic.as_str();
    if topic.is_empty() {
        return Err(CelestoError::InvalidInput(
            "Topic is required for idea generation.".to_string(),
        ));
    }

    if let Some(dump) = &options.dump_path {
        narrator.info(&format!(
            "Dumping is not supported yet, ignoring {}",
            dump.display()
        ));
    }

    narrator.info(&format!("Generating ideas for topic: {}", topic));

    let request = GenerationRequest::for_topic(topic);
    tracing::debug!(topic, "generating ideas");
    let ideas = provider.generate(&request).await?;

    narrator.info("Ideas generated successfully!");
    if narrator.is_verbose() {
        let pretty = serde_json::to_string_pretty(&ideas)?;
        narrator.info(&format!("Ideas: {}", pretty));
    }

    let result = match store_ideas(store, narrator, &ideas, options).await {
        Ok(path) => CmdResult::default().with_stored_path(path),
        Err(e) => {
            tracing::debug!(error = %e, "storing ideas failed");
            narrator.error(&format!("{} {}", STORE_ERROR_PREFIX, e));
            CmdResult::default()
        }
    };

    Ok(result.with_ideas(ideas))
}

async fn store_ideas<S, N>(
    store: &S,
    narrator: &N,
    ideas: &[Idea],
    options: &GenerateOptions,
) -> Result<PathBuf>
where
    S: IdeaStore + ?Sized,
    N: Narrator + ?Sized,
{
    let timestamp = Utc::now().timestamp_millis();
    let location = IdeaLocation::new(
        &options.kb_path(),
        &to_underscore_case(&options.topic),
        timestamp,
    );

    narrator.info(&format!("Storing ideas at: {}.", location.file.display()));
    store.save_ideas(&location, ideas).await?;
    narrator.success("Ideas stored successfully!");

    Ok(location.file)
}
