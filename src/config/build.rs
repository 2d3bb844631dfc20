//! `[build]` section configuration.
//!
//! Contains the filesystem layout: documentation directory, fragment files,
//! search index directory and the static assets to stage.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A static asset copied into the documentation directory.
///
/// `source` is relative to the project root, `dest` to the docs directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl AssetEntry {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// `[build]` section in docfix.toml - paths consumed and produced by a run.
///
/// # Example
/// ```toml
/// [build]
/// docs = "docs"                 # Generated documentation directory
/// fragments = "support/jsdoc"   # Directory holding the HTML fragments
/// data = "data"                 # Search index directory (inside docs)
///
/// [[build.assets]]
/// source = "dist/async.js"
/// dest = "scripts/async.js"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Generated documentation directory, rewritten in place.
    #[serde(default = "defaults::build::docs")]
    #[educe(Default = defaults::build::docs())]
    pub docs: PathBuf,

    /// Directory holding `head_links` and `header`.
    #[serde(default = "defaults::build::fragments")]
    #[educe(Default = defaults::build::fragments())]
    pub fragments: PathBuf,

    /// Fragment inserted before `</head>` of every page.
    #[serde(default = "defaults::build::head_links")]
    #[educe(Default = defaults::build::head_links())]
    pub head_links: PathBuf,

    /// Fragment inserted at the top of every page body.
    #[serde(default = "defaults::build::header")]
    #[educe(Default = defaults::build::header())]
    pub header: PathBuf,

    /// Search index output directory, relative to `docs`.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Static assets staged before processing.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: Vec<AssetEntry>,
}

impl BuildConfig {
    /// Full path of the head links fragment.
    pub fn head_links_path(&self) -> PathBuf {
        self.fragments.join(&self.head_links)
    }

    /// Full path of the header fragment.
    pub fn header_path(&self) -> PathBuf {
        self.fragments.join(&self.header)
    }

    /// Full path of the search index directory.
    pub fn data_dir(&self) -> PathBuf {
        self.docs.join(&self.data)
    }
}
