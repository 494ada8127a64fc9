//! Grouping pipeline — classifies a batch of news posts with the model and
//! reattaches the result to the original records.
//!
//! Flow: build_system_prompt + build_user_prompt → TextGenerationService →
//!       reconcile → annotated subset of the input posts.
//!
//! Error policy: data-shape problems in the model's output never fail the
//! batch; they degrade to fewer annotated posts. Transport and auth failures
//! propagate unmodified.

pub mod prompts;
pub mod reconcile;

pub use reconcile::{parse_records, reconcile, ClassificationRecord};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::llm_client::{classification_response_schema, LlmError, TextGenerationService};
use crate::models::{KnownTaxonomy, Post};
use crate::grouping::prompts::{build_system_prompt, build_user_prompt};

/// Runs one grouping pass over a batch of posts.
///
/// Returns the subset of `posts` the model classified, each with
/// `categories`, `event` and `persons` filled in. Posts the model skipped
/// (or whose records were lost to output truncation) are simply absent from
/// the result. An empty model response is logged and yields an empty result,
/// not an error.
pub async fn group_posts(
    svc: &dyn TextGenerationService,
    config: &Config,
    posts: Vec<Post>,
    taxonomy: &KnownTaxonomy,
) -> Result<Vec<Post>, LlmError> {
    let system_prompt = build_system_prompt(taxonomy);
    let user_prompt = build_user_prompt(&posts)?;
    let schema = classification_response_schema();

    let raw = svc
        .generate(&system_prompt, &user_prompt, &schema, &config.model)
        .await?;

    let Some(raw) = raw else {
        warn!("no response from the model or no usable candidate text; batch left unclassified");
        return Ok(Vec::new());
    };

    debug!("model response: {raw}");

    let batch_size = posts.len();
    let grouped = reconcile(&raw, posts);
    info!("annotated {}/{} posts in batch", grouped.len(), batch_size);

    Ok(grouped)
}
