//! `docsite render` command implementation.

use clap::Args;
use docsite_app::{Action, Mount};
use docsite_config::CliSettings;

use super::{SiteArgs, mount_page};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Path and query to render.
    #[arg(default_value = "/")]
    url: String,

    /// Render with the navigation menu open.
    #[arg(long)]
    menu_open: bool,

    /// Render as if the page were scrolled to this offset.
    #[arg(long)]
    scroll_y: Option<f64>,

    /// Print the mount target element instead of its children.
    #[arg(long)]
    outer: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the page cannot be mounted.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(CliSettings::default())?;

        let (mut app, _events) = mount_page(&config, &self.url, self.scroll_y)?;
        if self.menu_open {
            app.dispatch(Action::OpenMenu)?;
        }

        let (_, mount) = app.unmount();
        output.highlight(&format!("#{}", mount.target_id()));
        if self.outer {
            output.print(&mount.outer_html())?;
        } else {
            output.print(mount.html())?;
        }
        Ok(())
    }
}
