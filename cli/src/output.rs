use owo_colors::OwoColorize;
use sobjgen_lib::{GenerateResult, ProgressEvent};

/// Prints one progress event to stderr.
///
/// In `--json` mode only failures are printed, so stdout stays parseable
/// and problems still surface.
pub fn print_progress(event: &ProgressEvent, quiet: bool) {
    match event {
        ProgressEvent::ObjectFailed { .. } => {
            eprintln!("{}", event.to_string().yellow());
        }
        _ if !quiet => eprintln!("{event}"),
        _ => {}
    }
}

/// Prints the human-readable run summary to stdout.
pub fn print_summary(result: &GenerateResult) {
    if result.cancelled {
        println!("{}", "Generation cancelled".yellow());
    }
    println!(
        "Generated {} SObject definitions ({} standard, {} custom)",
        result.total_objects.green(),
        result.standard_objects,
        result.custom_objects
    );
}

/// Prints the run result as JSON to stdout.
pub fn print_json(result: &GenerateResult) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
