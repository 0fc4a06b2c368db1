//! Per-route page metadata: title, description, keywords, canonical URL
//! and social-preview fields. Parametric routes compute these from the
//! fetched record; `not_found` is the variant served when the record is
//! absent.

use serde::Serialize;

use crate::config::Config;
use crate::content::image::{self, FALLBACK_IMAGE_URL};
use crate::content::models::{BlogPostDetail, Couple, ImageRef, Region};

pub const SITE_NAME: &str = "Laurel & Pine Events";
pub const SITE_TAGLINE: &str = "Wedding planning & design in San Diego";
pub const DEFAULT_DESCRIPTION: &str = "Full-service wedding planning and design \
    for celebrations across San Diego, North County, Orange County and the \
    Temecula Valley.";
/// Social card served from the site's own static assets.
pub const DEFAULT_SOCIAL_IMAGE: &str = "/images/social-card.jpg";

const BASE_KEYWORDS: &[&str] = &[
    "wedding planner",
    "san diego weddings",
    "wedding design",
    "southern california weddings",
];

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub og_type: &'static str,
    pub og_image: String,
    pub twitter_card: &'static str,
    pub noindex: bool,
}

fn page(config: &Config, path: &str, title: String, description: String) -> PageMeta {
    PageMeta {
        title,
        description,
        keywords: BASE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        canonical: format!("{}{path}", config.base_url),
        og_type: "website",
        og_image: format!("{}{DEFAULT_SOCIAL_IMAGE}", config.base_url),
        twitter_card: "summary_large_image",
        noindex: false,
    }
}

/// CDN URL for a record's social image, or the static default when the
/// record has none resolvable.
fn social_image(config: &Config, image: Option<&ImageRef>) -> String {
    let Some(image_ref) = image else {
        return format!("{}{DEFAULT_SOCIAL_IMAGE}", config.base_url);
    };
    let url = image::resolve(
        &config.sanity_project_id,
        &config.sanity_dataset,
        image_ref,
        Some((1200, 630)),
    );
    if url == FALLBACK_IMAGE_URL {
        format!("{}{DEFAULT_SOCIAL_IMAGE}", config.base_url)
    } else {
        url
    }
}

pub fn home(config: &Config) -> PageMeta {
    page(
        config,
        "",
        format!("{SITE_NAME} — {SITE_TAGLINE}"),
        DEFAULT_DESCRIPTION.to_string(),
    )
}

pub fn about(config: &Config) -> PageMeta {
    page(
        config,
        "/about",
        format!("About Our Studio — {SITE_NAME}"),
        "Meet the planners behind Laurel & Pine and the philosophy that \
         shapes every celebration we design."
            .to_string(),
    )
}

pub fn contact(config: &Config) -> PageMeta {
    page(
        config,
        "/contact",
        format!("Start Planning — {SITE_NAME}"),
        "Tell us about your wedding day and a planner from our studio will \
         be in touch within two business days."
            .to_string(),
    )
}

pub fn blog_index(config: &Config) -> PageMeta {
    page(
        config,
        "/blog",
        format!("Planning Journal — {SITE_NAME}"),
        "Planning advice, venue spotlights and real-wedding stories from \
         our studio journal."
            .to_string(),
    )
}

pub fn blog_post(config: &Config, detail: &BlogPostDetail) -> PageMeta {
    let post = &detail.post;
    let mut meta = page(
        config,
        &format!("/blog/{}", post.slug),
        format!("{} — {SITE_NAME}", post.title),
        post.excerpt.clone().unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    );
    meta.og_type = "article";
    meta.og_image = social_image(config, post.main_image.as_ref());
    meta.keywords
        .extend(post.categories.iter().map(|c| c.title.to_lowercase()));
    meta
}

pub fn portfolio_index(config: &Config) -> PageMeta {
    page(
        config,
        "/portfolio",
        format!("Real Weddings — {SITE_NAME}"),
        "A portfolio of the celebrations we have planned and designed, from \
         coastal ceremonies to vineyard weekends."
            .to_string(),
    )
}

pub fn couple(config: &Config, couple: &Couple) -> PageMeta {
    let description = couple.tagline.clone().unwrap_or_else(|| {
        match (&couple.venue_name, &couple.location) {
            (Some(venue), Some(location)) => {
                format!("{}'s wedding at {venue} in {location}.", couple.names)
            }
            _ => format!("{}'s wedding, planned by {SITE_NAME}.", couple.names),
        }
    });
    let mut meta = page(
        config,
        &format!("/portfolio/{}", couple.slug),
        format!("{} — Real Wedding — {SITE_NAME}", couple.names),
        description,
    );
    meta.og_type = "article";
    meta.og_image = social_image(config, couple.hero_image.as_ref());
    meta
}

pub fn venues(config: &Config, region: Region) -> PageMeta {
    let mut meta = page(
        config,
        &format!("/venues/{}", region.slug()),
        format!("{} Wedding Venues — {SITE_NAME}", region.display_name()),
        format!(
            "The {} wedding venues we know inside out, with the planning \
             notes we share with our couples.",
            region.display_name()
        ),
    );
    meta.keywords.push(format!(
        "{} wedding venues",
        region.display_name().to_lowercase()
    ));
    meta
}

pub fn vendors(config: &Config) -> PageMeta {
    page(
        config,
        "/vendors",
        format!("Preferred Vendors — {SITE_NAME}"),
        "The photographers, florists and crews we trust with our couples' \
         weddings."
            .to_string(),
    )
}

/// Served with a 404 status whenever a parametric route's record is absent.
pub fn not_found(config: &Config) -> PageMeta {
    let mut meta = page(
        config,
        "/404",
        format!("Page Not Found — {SITE_NAME}"),
        "The page you are looking for does not exist or has moved.".to_string(),
    );
    meta.noindex = true;
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::content::models::{AssetPointer, BlogPost};

    fn detail(main_image: Option<ImageRef>) -> BlogPostDetail {
        BlogPostDetail {
            post: BlogPost {
                id: "p1".to_string(),
                title: "Coastal ceremonies".to_string(),
                slug: "coastal-ceremonies".to_string(),
                excerpt: Some("Salt air and timelines.".to_string()),
                main_image,
                published_at: Utc::now(),
                read_time: Some(6),
                featured: false,
                categories: vec![],
                author: None,
            },
            body: vec![],
            related: vec![],
        }
    }

    #[test]
    fn test_blog_post_meta_is_instance_specific() {
        let meta = blog_post(&Config::for_tests(), &detail(None));
        assert!(meta.title.starts_with("Coastal ceremonies"));
        assert_eq!(meta.description, "Salt air and timelines.");
        assert_eq!(
            meta.canonical,
            "https://www.laurelandpineevents.com/blog/coastal-ceremonies"
        );
        assert_eq!(meta.og_type, "article");
    }

    #[test]
    fn test_social_image_prefers_record_image() {
        let with_image = detail(Some(ImageRef {
            asset: Some(AssetPointer {
                asset_ref: "image-a1b2c3-2000x3000-jpg".to_string(),
            }),
            alt: None,
            caption: None,
        }));
        let meta = blog_post(&Config::for_tests(), &with_image);
        assert!(meta.og_image.starts_with("https://cdn.sanity.io/images/"));

        let meta = blog_post(&Config::for_tests(), &detail(None));
        assert_eq!(
            meta.og_image,
            format!("https://www.laurelandpineevents.com{DEFAULT_SOCIAL_IMAGE}")
        );
    }

    #[test]
    fn test_not_found_variant_is_noindex() {
        let meta = not_found(&Config::for_tests());
        assert!(meta.noindex);
        assert!(meta.title.contains("Not Found"));
    }

    #[test]
    fn test_every_static_page_has_canonical_and_image() {
        let config = Config::for_tests();
        for meta in [
            home(&config),
            about(&config),
            contact(&config),
            blog_index(&config),
            portfolio_index(&config),
            vendors(&config),
            venues(&config, Region::Temecula),
        ] {
            assert!(meta.canonical.starts_with(&config.base_url));
            assert!(!meta.og_image.is_empty());
            assert!(!meta.description.is_empty());
        }
    }
}
