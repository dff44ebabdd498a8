//! Mutation handlers: toggle batches and brightness updates.

use lumo_core::{Command as CoreCommand, CommandOutcome, Controller};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Toggle each bulb independently and report the aggregate outcome.
///
/// Per-bulb failures are logged by the core as they happen; here we only
/// turn "at least one failed" into a failing exit.
pub async fn toggle(
    controller: &Controller,
    bulbs: Vec<String>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let total = bulbs.len();
    let outcome = controller.execute(CoreCommand::Toggle { ids: bulbs }).await?;

    let CommandOutcome::Batch(batch) = outcome else {
        return Err(CliError::Internal("toggle did not produce a batch".into()));
    };

    if batch.is_failure() {
        let failed_ids = batch
            .failed()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CliError::BatchFailed {
            failed: batch.failed_count(),
            total,
            failed_ids,
        });
    }

    if !global.quiet {
        eprintln!("Toggled {total} bulb(s)");
    }
    Ok(())
}

/// Set one bulb's brightness. The raw value string travels into the core,
/// which parses it before any request is constructed.
pub async fn brightness(
    controller: &Controller,
    bulb: String,
    value: String,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let label = bulb.clone();
    controller
        .execute(CoreCommand::SetBrightness { id: bulb, value })
        .await?;

    if !global.quiet {
        eprintln!("Brightness update sent to {label}");
    }
    Ok(())
}
