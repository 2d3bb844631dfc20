//! Per-page link fixing.
//!
//! # Steps
//!
//! ```text
//! raw page ──► TextFixer::apply ──► parse
//!                                     │
//!          ┌──────────────────────────┘
//!          ▼
//!   inject header ──► fix_toc ──► footer note ──► self links ──► render
//! ```

use super::link::rewrite_self_href;
use super::text::TextFixer;
use super::toc::fix_toc;
use super::{
    get_attr, is_processed, parse_document, parse_fragment, read_page, render_document, require,
    select_all, select_first, set_attr,
};
use crate::config::DocsConfig;
use crate::error::DocsError;
use anyhow::Result;
use kuchikiki::NodeRef;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Static snippets injected into every page.
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    /// Markup inserted before `</head>`.
    pub head_links: String,
    /// Markup inserted at the top of the body.
    pub header: String,
}

impl Fragments {
    /// Read both fragments from the configured fragment directory.
    pub fn load(config: &DocsConfig) -> Result<Self, DocsError> {
        Ok(Self {
            head_links: read_page(&config.build.head_links_path())?,
            header: read_page(&config.build.header_path())?,
        })
    }
}

/// Rewrites pages so every category resolves to the combined page.
#[derive(Debug)]
pub struct LinkFixer<'a> {
    config: &'a DocsConfig,
    text: TextFixer,
    header: String,
    module_files: Vec<String>,
}

impl<'a> LinkFixer<'a> {
    pub fn new(
        config: &'a DocsConfig,
        fragments: Fragments,
        module_files: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            config,
            text: TextFixer::new(&fragments.head_links, &config.page)?,
            header: fragments.header,
            module_files,
        })
    }

    /// Fix every page of `pages` (file names inside the docs directory).
    ///
    /// Pages are independent and processed in parallel; the first failure
    /// aborts the pass.
    pub fn fix_all(&self, pages: &[String]) -> Result<(), DocsError> {
        let docs = &self.config.build.docs;
        pages
            .par_iter()
            .try_for_each(|page| self.fix_file(&docs.join(page)))
    }

    /// Read, fix and overwrite a single page.
    pub fn fix_file(&self, path: &Path) -> Result<(), DocsError> {
        let raw = read_page(path)?;
        let html = self.fix_html(&raw, path)?;
        fs::write(path, html).map_err(|err| DocsError::Write(path.to_path_buf(), err))
    }

    /// Apply every fix to the markup of the page at `path`.
    pub fn fix_html(&self, raw: &str, path: &Path) -> Result<String, DocsError> {
        if is_processed(raw) {
            return Err(DocsError::AlreadyProcessed(path.to_path_buf()));
        }

        let document = parse_document(&self.text.apply(raw));
        self.inject_header(&document, path)?;
        fix_toc(&document, &self.module_files, &self.config.page)?;
        self.append_footer_note(&document)?;
        self.redirect_self_links(&document)?;

        render_document(&document, &self.config.template, path)
    }

    /// Insert the header directly before the content region, or at the top
    /// of the body when the region is not a direct child of it.
    fn inject_header(&self, document: &NodeRef, path: &Path) -> Result<(), DocsError> {
        let body = require(document, "body", path)?;
        let nodes = parse_fragment(&self.header);

        match select_first(document, &self.config.page.content_selector)? {
            Some(main) if main.parent().as_ref() == Some(&body) => {
                for node in nodes {
                    main.insert_before(node);
                }
            }
            _ => {
                for node in nodes.into_iter().rev() {
                    body.prepend(node);
                }
            }
        }
        Ok(())
    }

    fn append_footer_note(&self, document: &NodeRef) -> Result<(), DocsError> {
        for footer in select_all(document, "footer")? {
            for node in parse_fragment(&self.config.page.footer_note) {
                footer.append(node);
            }
        }
        Ok(())
    }

    fn redirect_self_links(&self, document: &NodeRef) -> Result<(), DocsError> {
        let page = &self.config.page;
        for elem in select_all(document, "[href]")? {
            let target = get_attr(&elem, "href")
                .and_then(|href| rewrite_self_href(&href, &page.main_module, &page.combined));
            if let Some(target) = target {
                set_attr(&elem, "href", target);
            }
        }
        Ok(())
    }
}
