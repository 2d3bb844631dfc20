//! Merging of per-category module pages into the combined page.
//!
//! # Flow
//!
//! ```text
//! list_module_files() ──► read_modules() (parallel) ──► combine() (ordered)
//!                                                          │
//!                           SearchIndex::extract() ◄───────┘
//!                                     │
//!                          write_combined_outputs()
//! ```

use crate::config::{DocsConfig, PageConfig};
use crate::error::DocsError;
use crate::html::link::title_anchor;
use crate::html::{parse_document, read_page, require, set_attr, write_document};
use crate::log;
use crate::search::SearchIndex;
use kuchikiki::NodeRef;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Raw markup of one module page.
#[derive(Debug, Clone)]
pub struct ModuleSource {
    pub path: PathBuf,
    pub html: String,
}

/// Module pages among `files`, in listing order.
///
/// A module page starts with the module prefix and is not the main module.
pub fn list_module_files(files: &[String], page: &PageConfig) -> Vec<String> {
    files
        .iter()
        .filter(|file| file.starts_with(&page.module_prefix) && **file != page.main_module)
        .cloned()
        .collect()
}

/// Read module pages in parallel, keeping listing order.
pub fn read_modules(docs: &Path, files: &[String]) -> Result<Vec<ModuleSource>, DocsError> {
    files
        .par_iter()
        .map(|file| {
            let path = docs.join(file);
            let html = read_page(&path)?;
            Ok(ModuleSource { path, html })
        })
        .collect()
}

/// Append the content region of every module to the main page's content
/// region, in order. Each module title gets an anchor id derived from its text.
///
/// Any module without a title or content region aborts the whole merge.
pub fn combine(
    main: NodeRef,
    main_path: &Path,
    modules: &[ModuleSource],
    page: &PageConfig,
) -> Result<NodeRef, DocsError> {
    let content = require(&main, &page.content_selector, main_path)?;

    for module in modules {
        let document = parse_document(&module.html);

        let title = require(&document, &page.title_selector, &module.path)?;
        set_attr(&title, "id", title_anchor(&title.text_contents()));

        let region = require(&document, &page.content_selector, &module.path)?;
        for child in region.children().collect::<Vec<_>>() {
            content.append(child);
        }
    }

    Ok(main)
}

/// Write the search index and the combined page.
pub fn write_combined_outputs(
    combined: &NodeRef,
    index: &SearchIndex,
    config: &DocsConfig,
) -> Result<(), DocsError> {
    index.write(&config.build.data_dir())?;
    let path = config.build.docs.join(&config.page.combined);
    write_document(combined, &config.template, &path)
}

/// Run the whole merge over the HTML files of the docs directory.
///
/// Returns the module pages that were merged.
pub fn combine_modules(files: &[String], config: &DocsConfig) -> Result<Vec<String>, DocsError> {
    let docs = &config.build.docs;
    let page = &config.page;
    let module_files = list_module_files(files, page);

    let main_path = docs.join(&page.main_module);
    let main = parse_document(&read_page(&main_path)?);
    let modules = read_modules(docs, &module_files)?;

    let combined = combine(main, &main_path, &modules, page)?;
    log!("combine"; "merged {} module pages into {}", modules.len(), page.combined);

    let index = SearchIndex::extract(&combined, page)?;
    log!(
        "search";
        "{} methods, {} source files",
        index.method_names.len(),
        index.source_files.len()
    );

    write_combined_outputs(&combined, &index, config)?;
    Ok(module_files)
}
