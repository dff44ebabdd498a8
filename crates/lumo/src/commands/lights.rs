//! Listing handler: query bulbs and render them.

use lumo_core::{Controller, Selector};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    controller: &Controller,
    bulb: Option<String>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let selector = Selector::from(bulb);
    let lights = controller.lights(&selector).await?;

    let out = output::render_lights(&global.output, &lights, output::should_color(&global.color));
    output::print_output(&out, global.quiet);
    Ok(())
}
