//! Navigation panel rewriting.
//!
//! Every category now lives on the combined page, so the table of contents
//! drops the main module entry and points module links at the combined page.

use super::link::rewrite_module_href;
use super::{get_attr, select_all, set_attr, set_text};
use crate::config::PageConfig;
use crate::error::DocsError;
use kuchikiki::NodeRef;

/// Rewrite the navigation of a parsed page.
pub fn fix_toc(
    document: &NodeRef,
    module_files: &[String],
    page: &PageConfig,
) -> Result<(), DocsError> {
    remove_main_entry(document, &page.main_module)?;

    for heading in select_all(document, "nav > h3")? {
        set_text(&heading, &page.toc_title);
    }
    for subheading in select_all(document, "nav > h2")? {
        subheading.detach();
    }

    redirect_module_links(document, module_files, &page.combined)
}

/// Drop the list item holding the link to the main module page.
fn remove_main_entry(document: &NodeRef, main_module: &str) -> Result<(), DocsError> {
    for anchor in select_all(document, "li a[href]")? {
        if get_attr(&anchor, "href").as_deref() != Some(main_module) {
            continue;
        }
        if let Some(item) = anchor.ancestors().find(|node| is_element(node, "li")) {
            item.detach();
        }
    }
    Ok(())
}

/// Point every link into a module page at the combined page.
fn redirect_module_links(
    document: &NodeRef,
    module_files: &[String],
    combined: &str,
) -> Result<(), DocsError> {
    for elem in select_all(document, "[href]")? {
        let Some(href) = get_attr(&elem, "href") else {
            continue;
        };
        let text = elem.text_contents();
        let rewritten = module_files
            .iter()
            .find_map(|module| rewrite_module_href(&href, &text, module, combined));
        if let Some(target) = rewritten {
            set_attr(&elem, "href", target);
        }
    }
    Ok(())
}

fn is_element(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .is_some_and(|elem| &*elem.name.local == name)
}
