//! Typed content records as returned by the query catalog projections.
//!
//! Everything here is a read-only snapshot of a CMS document. Shapes are
//! validated at the fetch boundary by serde; the rest of the crate never
//! touches raw JSON from the content lake.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Pointer to an asset document inside the content lake.
/// The `_ref` string encodes the asset id, intrinsic dimensions and format
/// (`image-{id}-{w}x{h}-{fmt}`); see [`crate::content::image`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPointer {
    #[serde(rename = "_ref")]
    pub asset_ref: String,
}

/// An image field on a document. Never dereferenced directly — always
/// resolved to a CDN URL (or the static fallback) by the image resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetPointer>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Blog post summary — the shape shared by list queries and the `related`
/// sub-projection. The full document adds `body` and `related` on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub post: BlogPost,
    #[serde(default)]
    pub body: Vec<Block>,
    /// Same type, current slug excluded, at least one shared category,
    /// newest first, at most 3. Computed declaratively by the catalog query.
    #[serde(default)]
    pub related: Vec<BlogPost>,
}

/// One block of portable rich text. Only the block types our studio schema
/// can produce exist here; rendering lives in `content::portable_text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "block", rename_all = "camelCase")]
    Text {
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        list_item: Option<String>,
        #[serde(default)]
        children: Vec<Span>,
        #[serde(default)]
        mark_defs: Vec<MarkDef>,
    },
    #[serde(rename = "image")]
    Image {
        #[serde(default)]
        asset: Option<AssetPointer>,
        #[serde(default)]
        alt: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub def_type: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Portfolio entry for one wedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Couple {
    #[serde(rename = "_id")]
    pub id: String,
    pub names: String,
    pub slug: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub venue_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    /// Editorial date string shown on the page ("June 2026"); the raw
    /// `wedding_date` drives sorting and sitemap lastmod.
    #[serde(default)]
    pub display_date: Option<String>,
    #[serde(default)]
    pub hero_image: Option<ImageRef>,
    #[serde(default)]
    pub gallery: Vec<ImageRef>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub review: Option<CoupleReview>,
    #[serde(default)]
    pub vendors: Vec<CoupleVendor>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoupleReview {
    pub text: String,
    pub rating: u8,
}

impl CoupleReview {
    pub fn clamped_rating(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoupleVendor {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    SanDiego,
    NorthCounty,
    OrangeCounty,
    Temecula,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::SanDiego,
        Region::NorthCounty,
        Region::OrangeCounty,
        Region::Temecula,
    ];

    /// URL segment and CMS enum value for this region.
    pub fn slug(&self) -> &'static str {
        match self {
            Region::SanDiego => "san-diego",
            Region::NorthCounty => "north-county",
            Region::OrangeCounty => "orange-county",
            Region::Temecula => "temecula",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::SanDiego => "San Diego",
            Region::NorthCounty => "North County",
            Region::OrangeCounty => "Orange County",
            Region::Temecula => "Temecula Valley",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VenueType {
    Beach,
    Estate,
    Garden,
    Historic,
    Hotel,
    Ranch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub location: Option<String>,
    pub region: Region,
    #[serde(default)]
    pub venue_type: Option<VenueType>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default)]
    pub wedding_count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VendorCategory {
    Photography,
    Videography,
    Florals,
    Catering,
    Music,
    Beauty,
    Rentals,
    Stationery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: VendorCategory,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default)]
    pub wedding_count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestimonialSource {
    Google,
    Yelp,
    TheKnot,
    WeddingWire,
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    FullPlanning,
    PartialPlanning,
    MonthOfCoordination,
    DayOfCoordination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub names: String,
    pub slug: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub source: Option<TestimonialSource>,
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

impl Testimonial {
    /// Ratings are authored 1–5 in the studio; clamp anyway so a bad
    /// document can never emit an out-of-range schema.org rating.
    pub fn clamped_rating(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// Generic keyed image lookup (hero banners, social cards, team photos).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteAsset {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub key: String,
    pub image: ImageRef,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_slug_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_slug(region.slug()), Some(region));
        }
        assert_eq!(Region::from_slug("las-vegas"), None);
    }

    #[test]
    fn test_rating_clamped_to_schema_range() {
        let mut t: Testimonial = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "names": "Sam & Alex",
            "slug": "sam-alex",
            "rating": 9,
            "text": "Flawless from start to finish."
        }))
        .unwrap();
        assert_eq!(t.clamped_rating(), 5);
        t.rating = 0;
        assert_eq!(t.clamped_rating(), 1);
    }

    #[test]
    fn test_post_detail_deserializes_catalog_projection() {
        let detail: BlogPostDetail = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "title": "Coastal ceremonies",
            "slug": "coastal-ceremonies",
            "publishedAt": "2026-05-01T12:00:00Z",
            "readTime": 6,
            "featured": true,
            "categories": [{"_id": "c1", "title": "Planning", "slug": "planning"}],
            "body": [
                {"_type": "block", "style": "normal",
                 "children": [{"text": "Hello", "marks": []}], "markDefs": []}
            ],
            "related": []
        }))
        .unwrap();
        assert_eq!(detail.post.slug, "coastal-ceremonies");
        assert_eq!(detail.post.categories.len(), 1);
        assert_eq!(detail.body.len(), 1);
    }
}
