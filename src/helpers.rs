//! Tag helpers combining asset resolution, mount-prefix composition and
//! cache busting.
//!
//! Each call resolves one [`Asset`], renders one [`Tag`] and returns one
//! markup string; nothing is cached or shared between calls, so the helpers
//! need no synchronisation even when the host renders pages from many
//! threads.

use std::collections::BTreeMap;

use log::debug;

use crate::asset::{Asset, AssetError};
use crate::config::Host;
use crate::references::is_external_reference;
use crate::tag::Tag;

/// Renders stylesheet, script and image tags for a configured host.
#[derive(Debug, Clone)]
pub struct AssetTagHelper<H> {
    host: H,
}

impl<H: Host> AssetTagHelper<H> {
    /// Create a helper for the given host configuration.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Render a `<link rel="stylesheet" ... />` tag for `url`.
    pub fn stylesheet_tag(&self, url: &str) -> Result<String, AssetError> {
        let href = self.resolved_reference(url)?;
        let tag = Tag::new("link", BTreeMap::from([
            ("rel".to_string(), "stylesheet".to_string()),
            ("charset".to_string(), "utf-8".to_string()),
            ("media".to_string(), "screen".to_string()),
            ("href".to_string(), href),
        ]));
        Ok(tag.render())
    }

    /// Render a `<script ...></script>` pair for `url`.
    ///
    /// Script elements require an explicit close, so the open-form tag is
    /// paired with `</script>` here rather than left to the template layer.
    pub fn script_tag(&self, url: &str) -> Result<String, AssetError> {
        let src = self.resolved_reference(url)?;
        let tag = Tag::unclosed("script", BTreeMap::from([
            ("charset".to_string(), "utf-8".to_string()),
            ("src".to_string(), src),
        ]));
        Ok(format!("{}</script>", tag.render()))
    }

    /// Render an `<img ... />` tag for `url`.
    pub fn image_tag(&self, url: &str) -> Result<String, AssetError> {
        let src = self.resolved_reference(url)?;
        let tag = Tag::new("img", BTreeMap::from([("src".to_string(), src)]));
        Ok(tag.render())
    }

    /// Produce the final href/src for a logical asset URL.
    ///
    /// External references pass through verbatim. Local references resolve
    /// against the asset root (failing if the file is missing), gain the
    /// mount prefix and carry a `?ts=` parameter so client caches refetch
    /// whenever the file's modification time changes.
    fn resolved_reference(&self, url: &str) -> Result<String, AssetError> {
        if is_external_reference(url) {
            debug!("passing external reference through verbatim: {url}");
            return Ok(url.to_string());
        }

        let asset = Asset::resolve(url, self.host.asset_root())?;
        let mounted = compose_mount_path(self.host.mount_prefix(), url);
        Ok(cache_busted(&mounted, asset.timestamp()))
    }
}

/// Join the mount prefix and a logical URL into one absolute path.
///
/// The result always starts with a single `/` and never contains doubled
/// separators, whatever combination of trailing and leading slashes the
/// inputs carry.
fn compose_mount_path(mount_prefix: &str, url: &str) -> String {
    format!(
        "{}/{}",
        mount_prefix.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
    .replace('\\', "/")
}

/// Append the cache-busting query parameter to a composed path.
fn cache_busted(path: &str, timestamp: u64) -> String {
    format!("{path}?ts={timestamp}")
}
