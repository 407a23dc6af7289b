use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::scoring::Archetype;

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}

/// Resolve the static result page for an archetype and open it in the
/// default browser. The page must exist at `<pages_dir>/<archetype>.html`.
///
/// Returns the resolved page path on success.
pub fn open_result_page(pages_dir: &Path, archetype: Archetype) -> Result<PathBuf> {
    let page = resolve_result_page(pages_dir, archetype)?;

    let absolute = page
        .canonicalize()
        .with_context(|| format!("Failed to resolve result page at {}", page.display()))?;
    open_url(&format!("file://{}", absolute.display()))?;

    Ok(page)
}

/// Locate the result page for an archetype without opening it.
pub fn resolve_result_page(pages_dir: &Path, archetype: Archetype) -> Result<PathBuf> {
    let page = pages_dir.join(archetype.page());
    if !page.is_file() {
        anyhow::bail!(
            "Result page not found at {}. Expected a static page named {}",
            page.display(),
            archetype.page()
        );
    }
    Ok(page)
}
