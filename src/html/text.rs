//! Raw-text fixes applied before a page is parsed.
//!
//! These run on the markup itself so they match text the parser would
//! otherwise split across nodes or normalize away.

use super::PROCESSED_MARKER;
use crate::config::PageConfig;
use anyhow::Result;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// `>module:async.each<` style link text emitted for return types.
static RE_MODULE_LINK_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">module:(\w+)\.(\w+)<").unwrap());

const CLOSING_HEAD: &str = "</head>";
const CLOSING_BODY: &str = "</body>";

/// Compiled text substitutions for one run.
#[derive(Debug)]
pub struct TextFixer {
    head_insert: String,
    body_insert: String,
    labels: Vec<(Regex, String)>,
}

impl TextFixer {
    /// Build the fixer from the head links fragment and page settings.
    pub fn new(head_links: &str, page: &PageConfig) -> Result<Self> {
        let labels = page
            .labels
            .iter()
            .map(|(label, human)| {
                let re = Regex::new(&format!(">{}<", regex::escape(label)))?;
                Ok((re, format!(">{human}<")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            head_insert: format!("{head_links}{PROCESSED_MARKER}{CLOSING_HEAD}"),
            body_insert: format!("{}{CLOSING_BODY}", page.script_tag()),
            labels,
        })
    }

    /// Apply every substitution to a raw page.
    ///
    /// Only the first `</head>` and `</body>` receive insertions.
    pub fn apply(&self, html: &str) -> String {
        let mut html = html
            .replacen(CLOSING_HEAD, &self.head_insert, 1)
            .replacen(CLOSING_BODY, &self.body_insert, 1);

        for (re, human) in &self.labels {
            html = re.replace_all(&html, NoExpand(human.as_str())).into_owned();
        }

        RE_MODULE_LINK_TEXT.replace_all(&html, ">$2<").into_owned()
    }
}
