//! Link target rewriting.
//!
//! | Input `href` | Module | Output |
//! |--------------|--------|--------|
//! | `module-Utils.html` (text `Utils`) | `module-Utils.html` | `docs.html#utils` |
//! | `module-ControlFlow.html#waterfall` | `module-ControlFlow.html` | `docs.html#waterfall` |
//! | `module-async.html` | main | `docs.html` |

/// Anchor id for a category title: lowercased, whitespace removed.
pub fn title_anchor(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rewrite a link into module page `module` so it targets the combined page.
///
/// A link to the module page itself is a category title and points at the
/// section anchor built from `text`. A longer target only has the file name
/// substituted. Returns `None` for links into other pages.
pub fn rewrite_module_href(href: &str, text: &str, module: &str, combined: &str) -> Option<String> {
    if href == module {
        Some(format!("{combined}#{}", title_anchor(text)))
    } else if href.starts_with(module) {
        Some(href.replacen(module, combined, 1))
    } else {
        None
    }
}

/// Redirect a link to the main module page, keeping any fragment.
pub fn rewrite_self_href(href: &str, main: &str, combined: &str) -> Option<String> {
    if href == main {
        return Some(combined.to_owned());
    }
    href.strip_prefix(main)
        .filter(|rest| rest.starts_with('#'))
        .map(|rest| format!("{combined}{rest}"))
}
