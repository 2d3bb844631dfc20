//! `[page]` and `[template]` section configuration.
//!
//! Names, selectors and text used while rewriting the documentation pages.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[page]` section in docfix.toml - how pages are recognized and rewritten.
///
/// # Example
/// ```toml
/// [page]
/// main_module = "module-async.html"
/// combined = "docs.html"
/// toc_title = "Methods:"
///
/// [page.labels]
/// ControlFlow = "Control Flow"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Page of the top-level module, the merge target.
    #[serde(default = "defaults::page::main_module")]
    #[educe(Default = defaults::page::main_module())]
    pub main_module: String,

    /// File name of the combined page.
    #[serde(default = "defaults::page::combined")]
    #[educe(Default = defaults::page::combined())]
    pub combined: String,

    /// File name prefix shared by every module page.
    #[serde(default = "defaults::page::module_prefix")]
    #[educe(Default = defaults::page::module_prefix())]
    pub module_prefix: String,

    /// Selector of the content region merged into the combined page.
    #[serde(default = "defaults::page::content_selector")]
    #[educe(Default = defaults::page::content_selector())]
    pub content_selector: String,

    /// Selector of a module page's title element.
    #[serde(default = "defaults::page::title_selector")]
    #[educe(Default = defaults::page::title_selector())]
    pub title_selector: String,

    /// Link suffix identifying source listing pages.
    #[serde(default = "defaults::page::source_suffix")]
    #[educe(Default = defaults::page::source_suffix())]
    pub source_suffix: String,

    /// Heading text of the navigation panel.
    #[serde(default = "defaults::page::toc_title")]
    #[educe(Default = defaults::page::toc_title())]
    pub toc_title: String,

    /// Navigation entry left out of the method name index.
    #[serde(default = "defaults::page::home")]
    #[educe(Default = defaults::page::home())]
    pub home: String,

    /// Search widget script, relative to the docs directory.
    #[serde(default = "defaults::page::script")]
    #[educe(Default = defaults::page::script())]
    pub script: String,

    /// HTML appended to every page footer.
    #[serde(default = "defaults::page::footer_note")]
    #[educe(Default = defaults::page::footer_note())]
    pub footer_note: String,

    /// Category labels and their displayed form.
    #[serde(default = "defaults::page::labels")]
    #[educe(Default = defaults::page::labels())]
    pub labels: BTreeMap<String, String>,
}

impl PageConfig {
    /// `<script>` tag of the search widget.
    pub fn script_tag(&self) -> String {
        format!("<script src=\"{}\"></script>\n", self.script)
    }
}

/// `[template]` section - document shell used when writing a page.
///
/// A page is written as `begin + <head inner> + join + <body inner> + end`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    #[serde(default = "defaults::template::begin")]
    #[educe(Default = defaults::template::begin())]
    pub begin: String,

    #[serde(default = "defaults::template::join")]
    #[educe(Default = defaults::template::join())]
    pub join: String,

    #[serde(default = "defaults::template::end")]
    #[educe(Default = defaults::template::end())]
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::super::DocsConfig;

    #[test]
    fn test_page_config_defaults() {
        let config: DocsConfig = toml::from_str("[page]").unwrap();

        assert_eq!(config.page.main_module, "module-async.html");
        assert_eq!(config.page.combined, "docs.html");
        assert_eq!(config.page.module_prefix, "module");
        assert_eq!(config.page.content_selector, "#main");
        assert_eq!(config.page.title_selector, ".page-title");
        assert_eq!(config.page.source_suffix, ".js.html");
        assert_eq!(config.page.toc_title, "Methods:");
        assert_eq!(config.page.home, "Home");
        assert_eq!(
            config.page.labels.get("ControlFlow").map(String::as_str),
            Some("Control Flow")
        );
        assert!(config.page.footer_note.contains("modified from the original"));
    }

    #[test]
    fn test_page_config_labels_replace_defaults() {
        let config = r#"
            [page.labels]
            DataStructures = "Data Structures"
        "#;
        let config: DocsConfig = toml::from_str(config).unwrap();

        assert_eq!(config.page.labels.len(), 1);
        assert!(!config.page.labels.contains_key("ControlFlow"));
    }

    #[test]
    fn test_script_tag() {
        let config = DocsConfig::default();
        assert_eq!(
            config.page.script_tag(),
            "<script src=\"scripts/jsdoc-custom.js\"></script>\n"
        );
    }

    #[test]
    fn test_template_defaults() {
        let config = DocsConfig::default();
        assert_eq!(
            config.template.begin,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"
        );
        assert_eq!(config.template.join, "</head>\n<body>");
        assert_eq!(config.template.end, "</body>");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [page]
            combined = "all.html"
            unknown_field = "should_fail"
        "#;
        let result: Result<DocsConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
