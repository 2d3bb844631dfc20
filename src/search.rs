//! Search index extraction for the typeahead widget.
//!
//! Two JSON arrays are written next to the docs:
//!
//! | File               | Content                                  |
//! |--------------------|------------------------------------------|
//! | `sourceFiles.json` | targets of links to source listings      |
//! | `methodNames.json` | navigation entries, without `Home`       |

use crate::config::PageConfig;
use crate::error::DocsError;
use crate::html::{get_attr, select_all};
use kuchikiki::NodeRef;
use std::fs;
use std::path::Path;

pub const SOURCE_FILES_JSON: &str = "sourceFiles.json";
pub const METHOD_NAMES_JSON: &str = "methodNames.json";

/// The two sorted lists consumed by the search widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    pub source_files: Vec<String>,
    pub method_names: Vec<String>,
}

impl SearchIndex {
    /// Collect both lists from the combined page. Duplicates are kept.
    pub fn extract(page: &NodeRef, config: &PageConfig) -> Result<Self, DocsError> {
        let mut source_files: Vec<String> = select_all(page, "a[href]")?
            .iter()
            .filter_map(|anchor| get_attr(anchor, "href"))
            .filter(|href| href.ends_with(&config.source_suffix))
            .collect();
        source_files.sort();

        let mut method_names: Vec<String> = select_all(page, "nav a")?
            .iter()
            .map(NodeRef::text_contents)
            .filter(|name| *name != config.home)
            .collect();
        method_names.sort();

        Ok(Self {
            source_files,
            method_names,
        })
    }

    /// Write both lists as JSON arrays into `data_dir`, creating it if needed.
    pub fn write(&self, data_dir: &Path) -> Result<(), DocsError> {
        fs::create_dir_all(data_dir).map_err(|err| DocsError::Write(data_dir.to_path_buf(), err))?;
        write_json(&data_dir.join(SOURCE_FILES_JSON), &self.source_files)?;
        write_json(&data_dir.join(METHOD_NAMES_JSON), &self.method_names)
    }
}

fn write_json(path: &Path, entries: &[String]) -> Result<(), DocsError> {
    let json = serde_json::to_string(entries)
        .map_err(|err| DocsError::Write(path.to_path_buf(), err.into()))?;
    fs::write(path, json).map_err(|err| DocsError::Write(path.to_path_buf(), err))
}
