//! Command dispatch: bridges CLI args -> list controller -> output formatting.

pub mod config_cmd;
pub mod foods;
pub mod util;

use foodlist_api::FoodClient;
use foodlist_core::ListController;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// The controller every catalog command runs against.
pub type Catalog = ListController<FoodClient>;

/// Dispatch a catalog-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => foods::list(catalog, args, global).await,
        Command::Add(args) => foods::add(catalog, args, global).await,
        Command::Edit(args) => foods::edit(catalog, args, global).await,
        Command::Delete(args) => foods::delete(catalog, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
