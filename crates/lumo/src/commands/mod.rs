//! Command dispatch: bridges CLI args -> core Commands -> output formatting.

pub mod lights;
pub mod state;

use lumo_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List { bulb } => lights::handle(controller, bulb, global).await,
        Command::Toggle { bulbs } => state::toggle(controller, bulbs, global).await,
        Command::Bri { bulb, value } => state::brightness(controller, bulb, value, global).await,
        // Reserved commands and completions are handled before dispatch
        Command::Hue(_) | Command::Kel(_) | Command::Sat(_) | Command::Completions(_) => {
            unreachable!()
        }
    }
}
