//! Static asset staging.
//!
//! Copies the search widget script, its stylesheet and the bundled library
//! into the docs directory before any page is touched.

use crate::config::{AssetEntry, DocsConfig};
use crate::error::DocsError;
use std::fs;
use std::io::{Error, ErrorKind};

/// Copy every configured asset, overwriting existing destinations.
pub fn stage_assets(config: &DocsConfig) -> Result<(), DocsError> {
    config.build.assets.iter().try_for_each(stage_asset)
}

/// Copy a single asset, creating the destination directory if needed.
pub fn stage_asset(asset: &AssetEntry) -> Result<(), DocsError> {
    if !asset.source.is_file() {
        return Err(DocsError::Read(
            asset.source.clone(),
            Error::new(ErrorKind::NotFound, "asset source not found"),
        ));
    }

    if let Some(parent) = asset.dest.parent() {
        fs::create_dir_all(parent).map_err(|err| DocsError::Write(parent.to_path_buf(), err))?;
    }

    fs::copy(&asset.source, &asset.dest).map_err(|err| DocsError::Write(asset.dest.clone(), err))?;
    Ok(())
}
