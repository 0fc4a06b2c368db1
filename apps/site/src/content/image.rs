//! Image reference resolver — asset `_ref` strings to CDN URLs.
//!
//! A reference looks like `image-{assetId}-{width}x{height}-{format}`.
//! Anything that does not parse resolves to the static fallback so a bad
//! document can degrade a picture, never a page.

use super::models::ImageRef;

/// Served from the site's own static assets; used whenever a reference
/// has no resolvable asset id.
pub const FALLBACK_IMAGE_URL: &str = "/images/fallback.jpg";

const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Resolves an image reference to a URL, optionally with `w`/`h` crop
/// transform parameters. Infallible by contract.
pub fn resolve(
    project_id: &str,
    dataset: &str,
    image: &ImageRef,
    size: Option<(u32, u32)>,
) -> String {
    let Some(pointer) = image.asset.as_ref() else {
        return FALLBACK_IMAGE_URL.to_string();
    };
    let Some((asset_id, dims, format)) = parse_ref(&pointer.asset_ref) else {
        return FALLBACK_IMAGE_URL.to_string();
    };

    let mut url = format!("{CDN_BASE}/{project_id}/{dataset}/{asset_id}-{dims}.{format}");
    if let Some((w, h)) = size {
        url.push_str(&format!("?w={w}&h={h}&fit=crop&auto=format"));
    }
    url
}

/// Splits `image-{assetId}-{w}x{h}-{format}` into its parts. The asset id
/// itself may contain dashes, so dimensions and format split from the right.
fn parse_ref(asset_ref: &str) -> Option<(&str, &str, &str)> {
    let rest = asset_ref.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (asset_id, dims) = rest.rsplit_once('-')?;

    let (w, h) = dims.split_once('x')?;
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if asset_id.is_empty() || format.is_empty() || !numeric(w) || !numeric(h) {
        return None;
    }
    Some((asset_id, dims, format))
}
