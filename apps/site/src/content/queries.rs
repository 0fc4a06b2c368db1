//! Query catalog — every GROQ read the site performs, as data.
//!
//! Each entry is a named, parameterized query specification. Nothing here
//! touches the network; binding and execution live in the content client,
//! which keeps the catalog testable on its own.

/// A named read query. `params` lists the `$name` variables the GROQ text
/// expects; the client rejects calls that bind anything else or leave one
/// of these unbound.
#[derive(Debug, Clone, Copy)]
pub struct QuerySpec {
    pub name: &'static str,
    pub groq: &'static str,
    pub params: &'static [&'static str],
}

pub const ALL_POSTS: QuerySpec = QuerySpec {
    name: "allPosts",
    groq: r#"*[_type == "post"] | order(publishedAt desc) {
  _id, title, "slug": slug.current, excerpt, mainImage, publishedAt, readTime, featured,
  "categories": categories[]->{_id, title, "slug": slug.current, description},
  "author": author->{_id, name, image, bio}
}"#,
    params: &[],
};

/// Full post plus related posts: same type, current slug excluded, at least
/// one shared category reference, newest first, capped at 3.
pub const POST_BY_SLUG: QuerySpec = QuerySpec {
    name: "postBySlug",
    groq: r#"*[_type == "post" && slug.current == $slug][0] {
  _id, title, "slug": slug.current, excerpt, mainImage, publishedAt, readTime, featured,
  "categories": categories[]->{_id, title, "slug": slug.current, description},
  "author": author->{_id, name, image, bio},
  body,
  "related": *[_type == "post" && slug.current != $slug
      && count(categories[@._ref in ^.^.categories[]._ref]) > 0]
    | order(publishedAt desc) [0...3] {
      _id, title, "slug": slug.current, excerpt, mainImage, publishedAt, readTime, featured,
      "categories": categories[]->{_id, title, "slug": slug.current, description},
      "author": author->{_id, name, image, bio}
    }
}"#,
    params: &["slug"],
};

pub const FEATURED_POSTS: QuerySpec = QuerySpec {
    name: "featuredPosts",
    groq: r#"*[_type == "post" && featured == true] | order(publishedAt desc) [0...3] {
  _id, title, "slug": slug.current, excerpt, mainImage, publishedAt, readTime, featured,
  "categories": categories[]->{_id, title, "slug": slug.current, description},
  "author": author->{_id, name, image, bio}
}"#,
    params: &[],
};

pub const ALL_CATEGORIES: QuerySpec = QuerySpec {
    name: "allCategories",
    groq: r#"*[_type == "category"] | order(title asc) {
  _id, title, "slug": slug.current, description
}"#,
    params: &[],
};

pub const SITE_ASSET_BY_KEY: QuerySpec = QuerySpec {
    name: "siteAssetByKey",
    groq: r#"*[_type == "siteAsset" && key.current == $key][0] {
  _id, title, "key": key.current, image, category, description
}"#,
    params: &["key"],
};

pub const SITE_ASSETS_BY_CATEGORY: QuerySpec = QuerySpec {
    name: "siteAssetsByCategory",
    groq: r#"*[_type == "siteAsset" && category == $category] | order(title asc) {
  _id, title, "key": key.current, image, category, description
}"#,
    params: &["category"],
};

pub const VENUES_BY_REGION: QuerySpec = QuerySpec {
    name: "venuesByRegion",
    groq: r#"*[_type == "venue" && region == $region] | order(preferred desc, name asc) {
  _id, name, "slug": slug.current, location, region, venueType, website, image,
  description, coordinates, preferred, weddingCount, featured
}"#,
    params: &["region"],
};

pub const ALL_COUPLES: QuerySpec = QuerySpec {
    name: "allCouples",
    groq: r#"*[_type == "couple"] | order(weddingDate desc) {
  _id, names, "slug": slug.current, tagline, venueName, venueUrl, location,
  weddingDate, displayDate, heroImage, gallery, featured, guestCount, style,
  colors, review, vendors, highlights
}"#,
    params: &[],
};

pub const COUPLE_BY_SLUG: QuerySpec = QuerySpec {
    name: "coupleBySlug",
    groq: r#"*[_type == "couple" && slug.current == $slug][0] {
  _id, names, "slug": slug.current, tagline, venueName, venueUrl, location,
  weddingDate, displayDate, heroImage, gallery, featured, guestCount, style,
  colors, review, vendors, highlights
}"#,
    params: &["slug"],
};

pub const FEATURED_TESTIMONIALS: QuerySpec = QuerySpec {
    name: "featuredTestimonials",
    groq: r#"*[_type == "testimonial" && featured == true] | order(displayOrder asc) {
  _id, names, "slug": slug.current, venue, weddingDate, rating, text, image,
  featured, source, serviceType, highlights, displayOrder
}"#,
    params: &[],
};

pub const ALL_VENDORS: QuerySpec = QuerySpec {
    name: "allVendors",
    groq: r#"*[_type == "vendor"] | order(preferred desc, name asc) {
  _id, name, "slug": slug.current, category, website, instagram, email, phone,
  logo, description, location, preferred, weddingCount, featured
}"#,
    params: &[],
};

pub const CATALOG: &[&QuerySpec] = &[
    &ALL_POSTS,
    &POST_BY_SLUG,
    &FEATURED_POSTS,
    &ALL_CATEGORIES,
    &SITE_ASSET_BY_KEY,
    &SITE_ASSETS_BY_CATEGORY,
    &VENUES_BY_REGION,
    &ALL_COUPLES,
    &COUPLE_BY_SLUG,
    &FEATURED_TESTIMONIALS,
    &ALL_VENDORS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// `$name` variables appearing in a GROQ text.
    fn variables(groq: &str) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        let mut rest = groq;
        while let Some(idx) = rest.find('$') {
            let tail = &rest[idx + 1..];
            let name: String = tail
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if !name.is_empty() {
                vars.insert(name);
            }
            rest = tail;
        }
        vars
    }

    #[test]
    fn test_declared_params_match_groq_variables() {
        for spec in CATALOG {
            let declared: BTreeSet<String> =
                spec.params.iter().map(|p| p.to_string()).collect();
            assert_eq!(
                variables(spec.groq),
                declared,
                "query `{}` declares params that disagree with its GROQ text",
                spec.name
            );
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: BTreeSet<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_related_posts_excludes_self_and_caps_at_three() {
        let groq = POST_BY_SLUG.groq;
        assert!(groq.contains("slug.current != $slug"));
        assert!(groq.contains("[0...3]"));
        assert!(groq.contains("order(publishedAt desc)"));
        assert!(groq.contains("categories[@._ref in ^.^.categories[]._ref]"));
    }

    #[test]
    fn test_catalog_is_read_only() {
        for spec in CATALOG {
            assert!(
                spec.groq.trim_start().starts_with("*["),
                "query `{}` is not a filter expression",
                spec.name
            );
        }
    }
}
