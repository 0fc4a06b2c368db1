//! Fetch functions — one per catalog query, with the degradation policy
//! applied.
//!
//! List and decoration fetches never fail: a content outage logs a warning
//! and the page renders with that section empty. Page-identity fetches
//! (`post_by_slug`, `couple_by_slug`) surface errors and use `Ok(None)` as
//! the not-found sentinel.

use serde_json::json;
use tracing::warn;

use super::models::{
    BlogPost, BlogPostDetail, Category, Couple, Region, SiteAsset, Testimonial, Vendor, Venue,
};
use super::queries;
use super::{ContentClient, ContentError};

pub async fn all_posts(content: &ContentClient) -> Vec<BlogPost> {
    list_or_empty(content.run(&queries::ALL_POSTS, &[]).await, "allPosts")
}

pub async fn featured_posts(content: &ContentClient) -> Vec<BlogPost> {
    list_or_empty(
        content.run(&queries::FEATURED_POSTS, &[]).await,
        "featuredPosts",
    )
}

pub async fn all_categories(content: &ContentClient) -> Vec<Category> {
    list_or_empty(
        content.run(&queries::ALL_CATEGORIES, &[]).await,
        "allCategories",
    )
}

pub async fn post_by_slug(
    content: &ContentClient,
    slug: &str,
) -> Result<Option<BlogPostDetail>, ContentError> {
    content
        .run(&queries::POST_BY_SLUG, &[("slug", json!(slug))])
        .await
}

pub async fn all_couples(content: &ContentClient) -> Vec<Couple> {
    list_or_empty(content.run(&queries::ALL_COUPLES, &[]).await, "allCouples")
}

pub async fn couple_by_slug(
    content: &ContentClient,
    slug: &str,
) -> Result<Option<Couple>, ContentError> {
    content
        .run(&queries::COUPLE_BY_SLUG, &[("slug", json!(slug))])
        .await
}

pub async fn venues_by_region(content: &ContentClient, region: Region) -> Vec<Venue> {
    list_or_empty(
        content
            .run(&queries::VENUES_BY_REGION, &[("region", json!(region.slug()))])
            .await,
        "venuesByRegion",
    )
}

pub async fn all_vendors(content: &ContentClient) -> Vec<Vendor> {
    list_or_empty(content.run(&queries::ALL_VENDORS, &[]).await, "allVendors")
}

pub async fn featured_testimonials(content: &ContentClient) -> Vec<Testimonial> {
    list_or_empty(
        content.run(&queries::FEATURED_TESTIMONIALS, &[]).await,
        "featuredTestimonials",
    )
}

/// Keyed decoration lookup; a miss or an error both degrade to `None`
/// (the caller substitutes the static fallback image).
pub async fn site_asset(content: &ContentClient, key: &str) -> Option<SiteAsset> {
    match content
        .run(&queries::SITE_ASSET_BY_KEY, &[("key", json!(key))])
        .await
    {
        Ok(asset) => asset,
        Err(e) => {
            warn!("siteAssetByKey query failed for `{key}`, using fallback: {e}");
            None
        }
    }
}

pub async fn site_assets_by_category(content: &ContentClient, category: &str) -> Vec<SiteAsset> {
    list_or_empty(
        content
            .run(&queries::SITE_ASSETS_BY_CATEGORY, &[("category", json!(category))])
            .await,
        "siteAssetsByCategory",
    )
}

fn list_or_empty<T>(result: Result<Option<Vec<T>>, ContentError>, query: &str) -> Vec<T> {
    match result {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            warn!("{query} query failed, rendering without this section: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_or_empty_swallows_errors() {
        let failed: Result<Option<Vec<u32>>, ContentError> = Err(ContentError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(list_or_empty(failed, "allPosts").is_empty());
    }

    #[test]
    fn test_list_or_empty_flattens_null_result() {
        let empty: Result<Option<Vec<u32>>, ContentError> = Ok(None);
        assert!(list_or_empty(empty, "allPosts").is_empty());

        let some: Result<Option<Vec<u32>>, ContentError> = Ok(Some(vec![1, 2]));
        assert_eq!(list_or_empty(some, "allPosts"), vec![1, 2]);
    }
}
