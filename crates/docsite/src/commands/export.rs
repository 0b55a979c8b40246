//! `docsite export` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docsite_app::{DocumentHead, Route, document};
use docsite_config::{CliSettings, Config};
use docsite_content::assets;
use tracing::info;

use super::{SiteArgs, mount_page};
use crate::error::CliError;
use crate::output::Output;

/// URL mounted to produce the not-found page.
const NOT_FOUND_URL: &str = "/404";

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Canonical base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a page cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(CliSettings {
            out_dir: self.out_dir,
            base_url: self.base_url,
            ..CliSettings::default()
        })?;

        output.info(&format!(
            "Exporting to {}",
            config.export_resolved.out_dir.display()
        ));
        let written = export_site(&config)?;
        output.success(&format!("Wrote {} pages", written.len()));
        Ok(())
    }
}

/// Render every page into `export.out_dir`.
///
/// Returns the written files in menu order, not-found page last.
pub(crate) fn export_site(config: &Config) -> Result<Vec<PathBuf>, CliError> {
    let out_dir = &config.export_resolved.out_dir;
    let mut written = Vec::new();

    for route in Route::ALL {
        let Some(path) = route.path() else { continue };
        let file = out_dir.join(page_file(path));
        write_page(config, path, route, &file)?;
        written.push(file);
    }

    let file = out_dir.join(&config.export_resolved.not_found_file);
    write_page(config, NOT_FOUND_URL, Route::NotFound, &file)?;
    written.push(file);

    Ok(written)
}

/// `/` maps to `index.html`, `/reference` to `reference/index.html`.
fn page_file(path: &str) -> PathBuf {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

fn page_title(config: &Config, route: Route) -> String {
    match route {
        Route::Home => config.site.title.clone(),
        _ => format!("{} - {}", route.label(), config.site.title),
    }
}

fn write_page(config: &Config, url: &str, route: Route, file: &Path) -> Result<(), CliError> {
    let (app, _events) = mount_page(config, url, None)?;
    let title = page_title(config, route);
    let canonical = route.path().and_then(|path| config.canonical_url(path));
    let head = DocumentHead {
        title: &title,
        canonical: canonical.as_deref(),
        stylesheet: assets::STYLESHEET,
        script: assets::SCRIPT,
    };
    let html = document(&head, app.target());

    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file, html)?;
    info!(path = %file.display(), ?route, "Wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.export_resolved.out_dir = dir.to_path_buf();
        config
    }

    #[test]
    fn test_page_file() {
        assert_eq!(page_file("/"), PathBuf::from("index.html"));
        assert_eq!(page_file("/reference"), PathBuf::from("reference/index.html"));
    }

    #[test]
    fn test_page_title() {
        let config = Config::default();
        assert_eq!(page_title(&config, Route::Home), "Hyperapp");
        assert_eq!(page_title(&config, Route::Tutorial), "Tutorial - Hyperapp");
    }

    #[test]
    fn test_export_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let written = export_site(&config).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("index.html"),
                dir.path().join("reference/index.html"),
                dir.path().join("tutorial/index.html"),
                dir.path().join("404.html"),
            ]
        );
        let reference = std::fs::read_to_string(dir.path().join("reference/index.html")).unwrap();
        assert!(reference.contains("<title>Reference - Hyperapp</title>"));
        assert!(reference.contains(r#"<a class="active" href="/reference">Reference</a>"#));
        assert!(!reference.contains("canonical"));

        let missing = std::fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert!(missing.contains("four-oh-four-page"));
    }

    #[test]
    fn test_export_adds_canonical_links() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.site.base_url = Some("https://hyperapp.dev".to_owned());

        export_site(&config).unwrap();

        let tutorial = std::fs::read_to_string(dir.path().join("tutorial/index.html")).unwrap();
        assert!(tutorial.contains(r#"<link rel="canonical" href="https://hyperapp.dev/tutorial">"#));
        let missing = std::fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert!(!missing.contains("canonical"));
    }
}
