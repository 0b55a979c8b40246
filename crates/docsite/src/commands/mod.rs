//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod inspect;
pub(crate) mod render;

pub(crate) use export::ExportArgs;
pub(crate) use inspect::InspectArgs;
pub(crate) use render::RenderArgs;

use std::path::PathBuf;

use clap::Args;
use docsite_app::{
    App, AppOptions, BrowserEvent, EventSender, HeadlessPlatform, HtmlMount, Site, event_channel,
};
use docsite_config::{CliSettings, Config};

use crate::error::CliError;

/// Headless application mounted for one URL.
pub(crate) type PageApp = App<HeadlessPlatform, HtmlMount>;

/// Arguments shared by every command.
#[derive(Args, Debug)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long, env = "DOCSITE_TITLE")]
    title: Option<String>,

    /// Displayed version (overrides config).
    #[arg(long = "site-version")]
    site_version: Option<String>,

    /// Header shadow threshold in pixels (overrides config).
    #[arg(long)]
    shadow_threshold: Option<f64>,
}

impl SiteArgs {
    /// Load config with these overrides plus `extra`.
    pub(crate) fn load(self, extra: CliSettings) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            title: self.title,
            version: self.site_version,
            shadow_threshold: self.shadow_threshold,
            ..extra
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Mount the application for `url` and apply the requested viewport.
///
/// A scroll offset is delivered the way a browser would: as a scroll event
/// followed by an animation frame.
pub(crate) fn mount_page(
    config: &Config,
    url: &str,
    scroll_y: Option<f64>,
) -> Result<(PageApp, EventSender), CliError> {
    let site = Site::new(config.site.title.clone(), config.site.version.clone());
    let options = AppOptions {
        header_shadow_threshold: config.header.shadow_threshold,
    };
    let (events, receiver) = event_channel();
    let mut app = App::mount(
        site,
        &options,
        HeadlessPlatform::new(url),
        HtmlMount::new(config.site.mount_id.clone())?,
        receiver,
    )?;

    if let Some(y) = scroll_y {
        events.send(BrowserEvent::Scroll { y });
        app.pump()?;
        app.frame()?;
    }

    Ok((app, events))
}
