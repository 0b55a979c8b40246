//! `docsite inspect` command implementation.

use clap::Args;
use docsite_app::{Action, Query, State, parse_query};
use docsite_config::CliSettings;

use super::{SiteArgs, mount_page};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Path and query to inspect.
    #[arg(default_value = "/")]
    url: String,

    /// Scroll offset to apply before inspecting.
    #[arg(long)]
    scroll_y: Option<f64>,

    /// Toggle the navigation menu before inspecting.
    #[arg(long)]
    toggle_menu: bool,

    /// Search parameter to merge into the state (repeatable).
    #[arg(long = "search", value_name = "KEY=VALUE")]
    search: Vec<String>,
}

impl InspectArgs {
    /// Execute the inspect command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the state cannot be serialized.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(CliSettings::default())?;

        let (mut app, _events) = mount_page(&config, &self.url, self.scroll_y)?;
        if self.toggle_menu {
            app.dispatch(Action::ToggleMenu)?;
        }
        if !self.search.is_empty() {
            app.dispatch(Action::SetSearchData(search_query(&self.search)))?;
        }

        output.print(&state_json(app.state())?)?;
        Ok(())
    }
}

/// Each `KEY=VALUE` is decoded like a query segment; later keys win.
fn search_query(pairs: &[String]) -> Query {
    pairs.iter().flat_map(|pair| parse_query(pair)).collect()
}

fn state_json(state: &State) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(state)?)
}
