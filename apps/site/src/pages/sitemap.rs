//! Sitemap and robots policy.
//!
//! The static page set is the baseline and always present; dynamic
//! collections add entries on top. Both collection fetches are degradable,
//! so a CMS outage shrinks the sitemap to the baseline instead of failing
//! the route.

use chrono::NaiveDate;

use crate::content::models::{BlogPost, Couple, Region};

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: &'static str,
    pub priority: f32,
}

/// Fixed routes that exist regardless of content.
fn static_entries(base_url: &str) -> Vec<SitemapEntry> {
    let mut entries = vec![
        entry(base_url, "", "weekly", 1.0),
        entry(base_url, "/about", "monthly", 0.7),
        entry(base_url, "/blog", "daily", 0.8),
        entry(base_url, "/portfolio", "weekly", 0.8),
        entry(base_url, "/vendors", "monthly", 0.6),
        entry(base_url, "/contact", "monthly", 0.7),
    ];
    for region in Region::ALL {
        entries.push(entry(
            base_url,
            &format!("/venues/{}", region.slug()),
            "monthly",
            0.7,
        ));
    }
    entries
}

fn entry(base_url: &str, path: &str, changefreq: &'static str, priority: f32) -> SitemapEntry {
    SitemapEntry {
        loc: format!("{base_url}{path}"),
        lastmod: None,
        changefreq,
        priority,
    }
}

pub fn build_entries(base_url: &str, posts: &[BlogPost], couples: &[Couple]) -> Vec<SitemapEntry> {
    let mut entries = static_entries(base_url);

    entries.extend(posts.iter().map(|post| SitemapEntry {
        loc: format!("{base_url}/blog/{}", post.slug),
        lastmod: Some(post.published_at.date_naive()),
        changefreq: "monthly",
        priority: 0.6,
    }));

    entries.extend(couples.iter().map(|couple| SitemapEntry {
        loc: format!("{base_url}/portfolio/{}", couple.slug),
        lastmod: couple.wedding_date,
        changefreq: "monthly",
        priority: 0.6,
    }));

    entries
}

pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", entry.loc));
        if let Some(lastmod) = entry.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod.format("%Y-%m-%d")));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.changefreq
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Allow everything except the JSON API and the CMS studio mount.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /api/\n\
         Disallow: /studio/\n\
         \n\
         Sitemap: {base_url}/sitemap.xml\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const BASE: &str = "https://www.laurelandpineevents.com";

    fn post(slug: &str) -> BlogPost {
        BlogPost {
            id: format!("post-{slug}"),
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: None,
            main_image: None,
            published_at: Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap(),
            read_time: None,
            featured: false,
            categories: vec![],
            author: None,
        }
    }

    #[test]
    fn test_failed_collections_leave_exact_static_baseline() {
        let entries = build_entries(BASE, &[], &[]);
        assert_eq!(entries, static_entries(BASE));
        assert_eq!(entries.len(), 6 + Region::ALL.len());
    }

    #[test]
    fn test_dynamic_entries_extend_the_baseline() {
        let entries = build_entries(BASE, &[post("coastal-ceremonies")], &[]);
        assert_eq!(entries.len(), static_entries(BASE).len() + 1);
        let post_entry = entries.last().unwrap();
        assert_eq!(
            post_entry.loc,
            "https://www.laurelandpineevents.com/blog/coastal-ceremonies"
        );
        assert_eq!(
            post_entry.lastmod,
            Some(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
        );
    }

    #[test]
    fn test_xml_contains_urlset_and_lastmod() {
        let xml = render_xml(&build_entries(BASE, &[post("a")], &[]));
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<urlset"));
        assert!(xml.contains("<loc>https://www.laurelandpineevents.com/blog/a</loc>"));
        assert!(xml.contains("<lastmod>2026-05-01</lastmod>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_robots_blocks_api_and_studio_only() {
        let robots = robots_txt(BASE);
        let disallowed: Vec<&str> = robots
            .lines()
            .filter_map(|line| line.strip_prefix("Disallow: "))
            .collect();
        assert_eq!(disallowed, vec!["/api/", "/studio/"]);
        assert!(robots.contains("Sitemap: https://www.laurelandpineevents.com/sitemap.xml"));
    }
}
