//! Documentation post-processing orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_docs()
//!     │
//!     ├── ensure_unprocessed() ──► refuse to run on already fixed output
//!     ├── Fragments::load() ──► head links and header snippets
//!     │
//!     ├── stage_assets() ──► copy widget script, stylesheet, library bundle
//!     │
//!     ├── combine_modules() ──► docs.html + data/{sourceFiles,methodNames}.json
//!     │
//!     └── LinkFixer::fix_all() ──► rewrite every page in parallel
//! ```
//!
//! Each stage reads what the previous one wrote, so stages run strictly in
//! sequence and the first error ends the run.

use crate::{
    assets::stage_assets,
    combine::combine_modules,
    config::DocsConfig,
    error::DocsError,
    html::{LinkFixer, is_processed, processor::Fragments, read_page},
    log,
};
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Post-process the documentation directory in place.
pub fn build_docs(config: &DocsConfig) -> Result<()> {
    let docs = &config.build.docs;

    ensure_unprocessed(config)?;
    let fragments = Fragments::load(config)?;

    stage_assets(config)?;
    log!("assets"; "staged {} files", config.build.assets.len());

    let mut pages = collect_html_files(docs)?;
    let module_files = combine_modules(&pages, config)?;
    if !pages.contains(&config.page.combined) {
        pages.push(config.page.combined.clone());
    }

    let fixer = LinkFixer::new(config, fragments, module_files)?;
    fixer.fix_all(&pages)?;
    log!("fix"; "rewrote {} pages", pages.len());

    log!("build"; "docs generated successfully");
    Ok(())
}

/// Fail when the main module page already carries the processed marker.
///
/// Fixing a page twice would duplicate its header and footer note.
fn ensure_unprocessed(config: &DocsConfig) -> Result<(), DocsError> {
    let main = config.build.docs.join(&config.page.main_module);
    if is_processed(&read_page(&main)?) {
        return Err(DocsError::AlreadyProcessed(main));
    }
    Ok(())
}

/// HTML file names directly inside `docs`, sorted by name.
pub fn collect_html_files(docs: &Path) -> Result<Vec<String>, DocsError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(docs).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| DocsError::Read(docs.to_path_buf(), err.into()))?;
        let is_html = entry.path().extension().is_some_and(|ext| ext == "html");
        if !entry.file_type().is_file() || !is_html {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_owned());
        }
    }
    Ok(files)
}
