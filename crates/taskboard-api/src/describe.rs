//! Advisory description pre-fill with a deterministic local fallback.

use std::sync::Arc;

use crate::traits::DescriptionGenerator;

/// Template used when the generation service is unavailable. Task creation
/// is never blocked on the collaborator.
pub fn fallback_description(title: &str) -> String {
    format!("Work item: {title}. Add acceptance criteria and implementation notes.")
}

/// Ask the generator for a description, substituting the local fallback on
/// any failure. Failures are logged, not surfaced.
pub async fn describe_or_fallback(
    generator: &Arc<dyn DescriptionGenerator>,
    title: &str,
    context: Option<&str>,
) -> String {
    match generator.generate(title, context).await {
        Ok(description) => description,
        Err(e) => {
            tracing::warn!("Description generation failed for {:?}: {}", title, e);
            fallback_description(title)
        }
    }
}
