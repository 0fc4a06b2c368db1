//! JSON-LD synthesis (schema.org structured data).
//!
//! One canonical organization identity exists across the whole site: the
//! home page declares the `LocalBusiness` node (the only place aggregate
//! ratings appear), and every other page references it by stable `@id`.

use serde_json::{json, Value};

use crate::config::Config;
use crate::content::models::{BlogPost, BlogPostDetail, Couple, Testimonial};
use crate::pages::meta::{DEFAULT_DESCRIPTION, SITE_NAME};

const SCHEMA_CONTEXT: &str = "https://schema.org";

pub fn organization_id(config: &Config) -> String {
    format!("{}/#organization", config.base_url)
}

fn organization_ref(config: &Config) -> Value {
    json!({ "@id": organization_id(config) })
}

/// The canonical business node, emitted on the home page only.
pub fn local_business(config: &Config, testimonials: &[Testimonial]) -> Value {
    let mut node = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "@id": organization_id(config),
        "name": SITE_NAME,
        "url": config.base_url,
        "description": DEFAULT_DESCRIPTION,
        "image": format!("{}/images/social-card.jpg", config.base_url),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "San Diego",
            "addressRegion": "CA",
            "addressCountry": "US"
        },
        "areaServed": ["San Diego", "North County", "Orange County", "Temecula Valley"],
        "priceRange": "$$$"
    });

    if !testimonials.is_empty() {
        let total: u32 = testimonials
            .iter()
            .map(|t| u32::from(t.clamped_rating()))
            .sum();
        let average = f64::from(total) / testimonials.len() as f64;
        node["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": format!("{average:.1}"),
            "reviewCount": testimonials.len(),
            "bestRating": "5",
            "worstRating": "1"
        });
    }

    node
}

/// Offer catalog for the planning services; references the organization.
pub fn professional_service(config: &Config) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ProfessionalService",
        "name": format!("{SITE_NAME} Planning Services"),
        "url": format!("{}/contact", config.base_url),
        "provider": organization_ref(config),
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Wedding planning services",
            "itemListElement": [
                {
                    "@type": "Offer",
                    "itemOffered": { "@type": "Service", "name": "Full-Service Planning & Design" }
                },
                {
                    "@type": "Offer",
                    "itemOffered": { "@type": "Service", "name": "Partial Planning" }
                },
                {
                    "@type": "Offer",
                    "itemOffered": { "@type": "Service", "name": "Month-Of Coordination" }
                }
            ]
        }
    })
}

pub fn review(config: &Config, testimonial: &Testimonial) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Review",
        "itemReviewed": organization_ref(config),
        "author": { "@type": "Person", "name": testimonial.names },
        "reviewBody": testimonial.text,
        "reviewRating": {
            "@type": "Rating",
            "ratingValue": testimonial.clamped_rating().to_string(),
            "bestRating": "5",
            "worstRating": "1"
        }
    })
}

/// Review node for a portfolio entry, when the couple left one.
pub fn couple_review(config: &Config, couple: &Couple) -> Option<Value> {
    let review = couple.review.as_ref()?;
    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Review",
        "itemReviewed": organization_ref(config),
        "author": { "@type": "Person", "name": couple.names },
        "reviewBody": review.text,
        "reviewRating": {
            "@type": "Rating",
            "ratingValue": review.clamped_rating().to_string(),
            "bestRating": "5",
            "worstRating": "1"
        }
    }))
}

pub fn blog(config: &Config, posts: &[BlogPost]) -> Value {
    let entries: Vec<Value> = posts
        .iter()
        .map(|post| {
            json!({
                "@type": "BlogPosting",
                "headline": post.title,
                "url": format!("{}/blog/{}", config.base_url, post.slug),
                "datePublished": post.published_at.to_rfc3339()
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Blog",
        "name": format!("{SITE_NAME} Planning Journal"),
        "url": format!("{}/blog", config.base_url),
        "publisher": organization_ref(config),
        "blogPost": entries
    })
}

pub fn article(config: &Config, detail: &BlogPostDetail, image_url: &str) -> Value {
    let post = &detail.post;
    let mut node = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": post.title,
        "url": format!("{}/blog/{}", config.base_url, post.slug),
        "datePublished": post.published_at.to_rfc3339(),
        "image": image_url,
        "publisher": organization_ref(config),
        "mainEntityOfPage": format!("{}/blog/{}", config.base_url, post.slug)
    });
    if let Some(excerpt) = &post.excerpt {
        node["description"] = json!(excerpt);
    }
    if let Some(author) = &post.author {
        node["author"] = json!({ "@type": "Person", "name": author.name });
    }
    node
}

pub fn collection_page(config: &Config, path: &str, name: &str, description: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "CollectionPage",
        "name": name,
        "url": format!("{}{path}", config.base_url),
        "description": description,
        "publisher": organization_ref(config)
    })
}

pub fn about_page(config: &Config) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "AboutPage",
        "name": format!("About {SITE_NAME}"),
        "url": format!("{}/about", config.base_url),
        "about": organization_ref(config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(rating: u8) -> Testimonial {
        serde_json::from_value(json!({
            "_id": format!("t{rating}"),
            "names": "Sam & Alex",
            "slug": "sam-alex",
            "rating": rating,
            "text": "Flawless."
        }))
        .unwrap()
    }

    #[test]
    fn test_every_node_shares_one_organization_identity() {
        let config = Config::for_tests();
        let id = organization_id(&config);
        assert_eq!(local_business(&config, &[])["@id"], json!(id));
        assert_eq!(professional_service(&config)["provider"]["@id"], json!(id));
        assert_eq!(review(&config, &testimonial(5))["itemReviewed"]["@id"], json!(id));
        assert_eq!(blog(&config, &[])["publisher"]["@id"], json!(id));
        assert_eq!(about_page(&config)["about"]["@id"], json!(id));
        assert_eq!(
            collection_page(&config, "/portfolio", "Real Weddings", "x")["publisher"]["@id"],
            json!(id)
        );
    }

    #[test]
    fn test_aggregate_rating_only_on_local_business() {
        let config = Config::for_tests();
        let reviews = [testimonial(5), testimonial(4)];
        let business = local_business(&config, &reviews);
        assert_eq!(business["aggregateRating"]["ratingValue"], json!("4.5"));
        assert_eq!(business["aggregateRating"]["reviewCount"], json!(2));

        // No other node may declare an aggregate rating.
        for node in [
            professional_service(&config),
            review(&config, &testimonial(5)),
            blog(&config, &[]),
            about_page(&config),
        ] {
            assert!(node.get("aggregateRating").is_none());
        }
    }

    #[test]
    fn test_no_rating_block_without_testimonials() {
        let business = local_business(&Config::for_tests(), &[]);
        assert!(business.get("aggregateRating").is_none());
    }

    #[test]
    fn test_review_rating_stays_in_schema_range() {
        let node = review(&Config::for_tests(), &testimonial(7));
        assert_eq!(node["reviewRating"]["ratingValue"], json!("5"));
    }
}
