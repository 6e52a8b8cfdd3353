//! Generation pipeline orchestrator.
//!
//! Single pass, four stages: list the org's SObjects, filter them by
//! category, describe + render + write each surviving object, aggregate the
//! per-object outcomes into one [`GenerateResult`].
//!
//! Per-object work runs as a bounded fan-out
//! (`stream::iter(..).buffer_unordered(n)`); a describe or write failure is
//! absorbed into that object's outcome and never aborts its siblings. Only
//! the initial listing and directory creation are fatal for the run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::{StreamExt, stream};
use serde::Serialize;
use tracing::{info, warn};

use crate::connection::OrgConnection;
use crate::error::Result;
use crate::render::render_class;
use crate::schema::{SObjectCategory, SObjectSummary};

/// Default number of in-flight describe requests.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// File extension of the generated stubs.
const STUB_EXTENSION: &str = "cls";

/// Structured progress notifications emitted during a run.
///
/// The sink never affects control flow or results; the `Display` impl
/// renders the human-readable strings the CLI prints.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The global describe request is being issued.
    FetchingObjects,
    /// Filtering is done; `0` objects found is a valid, empty run.
    ObjectsFound(usize),
    /// One object's describe/render/write task has started.
    Processing { name: String },
    /// One object failed; the run continues without it.
    ObjectFailed { name: String, reason: String },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::FetchingObjects => write!(f, "Fetching SObject list from org..."),
            ProgressEvent::ObjectsFound(count) => {
                write!(f, "Found {count} SObjects to process")
            }
            ProgressEvent::Processing { name } => write!(f, "Processing {name}..."),
            ProgressEvent::ObjectFailed { name, reason } => {
                write!(f, "Warning: Failed to process SObject {name}: {reason}")
            }
        }
    }
}

/// Optional observer for [`ProgressEvent`]s.
///
/// `Send + Sync` because per-object tasks emit events concurrently.
pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Options for one generation run.
#[derive(Clone, Default)]
pub struct GenerateOptions {
    /// Which objects to generate stubs for.
    pub category: SObjectCategory,
    /// Filesystem root; stubs land under `<root>/tools/sobjects/`.
    pub output_dir: PathBuf,
    /// Maximum in-flight describe requests; `0` means
    /// [`DEFAULT_CONCURRENCY`].
    pub concurrency: usize,
    /// Caller-owned abort flag. Objects whose task has not yet issued its
    /// describe call when the flag is set are skipped and the result
    /// reports `cancelled: true`.
    pub cancel: Option<Arc<AtomicBool>>,
    /// Progress observer.
    pub on_progress: Option<ProgressSink>,
}

impl fmt::Debug for GenerateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateOptions")
            .field("category", &self.category)
            .field("output_dir", &self.output_dir)
            .field("concurrency", &self.concurrency)
            .field("cancel", &self.cancel)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "..."))
            .finish()
    }
}

impl GenerateOptions {
    /// Options with defaults for everything but the output root.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the object category.
    #[must_use]
    pub fn category(mut self, category: SObjectCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the fan-out width.
    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Attaches a caller-owned cancellation flag.
    #[must_use]
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Attaches a progress observer.
    #[must_use]
    pub fn on_progress(mut self, sink: ProgressSink) -> Self {
        self.on_progress = Some(sink);
        self
    }
}

/// What happened to one object in the fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GenerateOutcome {
    Success { custom: bool },
    Failure,
    Skipped,
}

/// Aggregate result of one generation run.
///
/// Invariant: `total_objects == standard_objects + custom_objects`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    /// Stubs written under `standardObjects/`.
    pub standard_objects: u32,
    /// Stubs written under `customObjects/`.
    pub custom_objects: u32,
    /// Total stubs written.
    pub total_objects: u32,
    /// Whether the caller's cancel flag cut the run short.
    pub cancelled: bool,
}

/// Destination directory for one object, selected by its custom flag.
fn target_dir<'a>(standard_dir: &'a Path, custom_dir: &'a Path, custom: bool) -> &'a Path {
    if custom { custom_dir } else { standard_dir }
}

/// Describes, renders, and writes one object's stub.
async fn process_object(
    connection: &OrgConnection,
    summary: &SObjectSummary,
    standard_dir: &Path,
    custom_dir: &Path,
) -> Result<()> {
    let describe = connection.describe_sobject(&summary.name).await?;
    let content = render_class(&describe);

    let file_path = target_dir(standard_dir, custom_dir, summary.custom)
        .join(format!("{}.{STUB_EXTENSION}", summary.name));
    tokio::fs::write(&file_path, content).await?;

    Ok(())
}

/// Runs the full generation pipeline against one org.
///
/// Lists the org's SObjects, filters them to `options.category`, then
/// describes each survivor and writes its faux Apex class under
/// `<output_dir>/tools/sobjects/{standardObjects,customObjects}/<Name>.cls`.
///
/// Per-object failures are reported through the progress sink and excluded
/// from the counts; they do not fail the run.
///
/// ## Errors
///
/// - [`SobjgenError::ObjectList`](crate::SobjgenError::ObjectList) /
///   [`SobjgenError::Http`](crate::SobjgenError::Http) when the listing
///   request fails; no files are written
/// - [`SobjgenError::Io`](crate::SobjgenError::Io) when the destination
///   directories cannot be created
#[tracing::instrument(skip(connection, options), fields(category = ?options.category))]
pub async fn generate(connection: &OrgConnection, options: &GenerateOptions) -> Result<GenerateResult> {
    let emit = |event: ProgressEvent| {
        if let Some(sink) = &options.on_progress {
            sink(event);
        }
    };

    emit(ProgressEvent::FetchingObjects);
    let sobjects = connection.describe_global().await?;
    let sobjects = options.category.filter(sobjects);

    info!(count = sobjects.len(), "listed SObjects after filtering");
    emit(ProgressEvent::ObjectsFound(sobjects.len()));

    let sobjects_root = options.output_dir.join("tools").join("sobjects");
    let standard_dir = sobjects_root.join("standardObjects");
    let custom_dir = sobjects_root.join("customObjects");

    // create_dir_all is idempotent, so a pre-existing tree is fine.
    tokio::fs::create_dir_all(&standard_dir).await?;
    tokio::fs::create_dir_all(&custom_dir).await?;

    let concurrency = if options.concurrency == 0 {
        DEFAULT_CONCURRENCY
    } else {
        options.concurrency
    };

    let outcomes: Vec<GenerateOutcome> = stream::iter(sobjects.iter().map(|summary| {
        let standard_dir = standard_dir.as_path();
        let custom_dir = custom_dir.as_path();
        let cancel = options.cancel.as_deref();
        let emit = &emit;
        async move {
            if cancel.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
                return GenerateOutcome::Skipped;
            }

            emit(ProgressEvent::Processing {
                name: summary.name.clone(),
            });

            match process_object(connection, summary, standard_dir, custom_dir).await {
                Ok(()) => GenerateOutcome::Success {
                    custom: summary.custom,
                },
                Err(err) => {
                    warn!(object = %summary.name, error = %err, "failed to process SObject");
                    emit(ProgressEvent::ObjectFailed {
                        name: summary.name.clone(),
                        reason: err.to_string(),
                    });
                    GenerateOutcome::Failure
                }
            }
        }
    }))
    .buffer_unordered(concurrency)
    .collect()
    .await;

    let mut standard_objects = 0u32;
    let mut custom_objects = 0u32;
    let mut cancelled = false;

    for outcome in outcomes {
        match outcome {
            GenerateOutcome::Success { custom: true } => custom_objects += 1,
            GenerateOutcome::Success { custom: false } => standard_objects += 1,
            GenerateOutcome::Failure => {}
            GenerateOutcome::Skipped => cancelled = true,
        }
    }

    let result = GenerateResult {
        standard_objects,
        custom_objects,
        total_objects: standard_objects + custom_objects,
        cancelled,
    };

    info!(
        standard = result.standard_objects,
        custom = result.custom_objects,
        cancelled = result.cancelled,
        "generation run finished"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_event_display_matches_cli_wording() {
        assert_eq!(
            ProgressEvent::FetchingObjects.to_string(),
            "Fetching SObject list from org..."
        );
        assert_eq!(
            ProgressEvent::ObjectsFound(3).to_string(),
            "Found 3 SObjects to process"
        );
        assert_eq!(
            ProgressEvent::Processing {
                name: "Account".to_string()
            }
            .to_string(),
            "Processing Account..."
        );
        assert_eq!(
            ProgressEvent::ObjectFailed {
                name: "Broken__c".to_string(),
                reason: "boom".to_string()
            }
            .to_string(),
            "Warning: Failed to process SObject Broken__c: boom"
        );
    }

    #[test]
    fn target_dir_selects_by_custom_flag() {
        let standard = Path::new("/out/standardObjects");
        let custom = Path::new("/out/customObjects");
        assert_eq!(target_dir(standard, custom, false), standard);
        assert_eq!(target_dir(standard, custom, true), custom);
    }

    #[test]
    fn zero_concurrency_falls_back_to_default() {
        let options = GenerateOptions::new("/tmp/out").concurrency(0);
        let effective = if options.concurrency == 0 {
            DEFAULT_CONCURRENCY
        } else {
            options.concurrency
        };
        assert_eq!(effective, DEFAULT_CONCURRENCY);
    }
}
