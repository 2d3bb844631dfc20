//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use super::super::AssetEntry;
    use std::path::PathBuf;

    pub fn docs() -> PathBuf {
        "docs".into()
    }

    pub fn fragments() -> PathBuf {
        "support/jsdoc".into()
    }

    pub fn head_links() -> PathBuf {
        "head-data.html".into()
    }

    pub fn header() -> PathBuf {
        "navbar.html".into()
    }

    pub fn data() -> PathBuf {
        "data".into()
    }

    pub fn assets() -> Vec<AssetEntry> {
        vec![
            AssetEntry::new("dist/async.js", "scripts/async.js"),
            AssetEntry::new("support/jsdoc/jsdoc-custom.js", "scripts/jsdoc-custom.js"),
            AssetEntry::new("support/jsdoc/jsdoc-custom.css", "styles/jsdoc-custom.css"),
        ]
    }
}

// ============================================================================
// [page] Section Defaults
// ============================================================================

pub mod page {
    use std::collections::BTreeMap;

    pub fn main_module() -> String {
        "module-async.html".into()
    }

    pub fn combined() -> String {
        "docs.html".into()
    }

    pub fn module_prefix() -> String {
        "module".into()
    }

    pub fn content_selector() -> String {
        "#main".into()
    }

    pub fn title_selector() -> String {
        ".page-title".into()
    }

    pub fn source_suffix() -> String {
        ".js.html".into()
    }

    pub fn toc_title() -> String {
        "Methods:".into()
    }

    pub fn home() -> String {
        "Home".into()
    }

    pub fn script() -> String {
        "scripts/jsdoc-custom.js".into()
    }

    pub fn footer_note() -> String {
        concat!(
            " Documentation has been modified from the original. ",
            " For more information, please see the ",
            "<a href=\"https://github.com/caolan/async\">async</a> repository."
        )
        .into()
    }

    pub fn labels() -> BTreeMap<String, String> {
        BTreeMap::from([("ControlFlow".into(), "Control Flow".into())])
    }
}

// ============================================================================
// [template] Section Defaults
// ============================================================================

pub mod template {
    pub fn begin() -> String {
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n".into()
    }

    pub fn join() -> String {
        "</head>\n<body>".into()
    }

    pub fn end() -> String {
        "</body>".into()
    }
}
