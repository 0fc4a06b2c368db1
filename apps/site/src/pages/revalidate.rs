//! Revalidation policy — declarative staleness windows per route group.
//!
//! Content is eventually consistent: a page may be served up to `max_age`
//! seconds stale, and stays eligible for background regeneration for the
//! `stale_while_revalidate` window after that. This is advisory for the
//! CDN in front of the service, not an invalidation protocol.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revalidate {
    pub max_age: u32,
    pub stale_while_revalidate: u32,
}

impl Revalidate {
    pub const HOME: Revalidate = Revalidate {
        max_age: 3600,
        stale_while_revalidate: 86400,
    };
    /// Blog content changes most often.
    pub const BLOG: Revalidate = Revalidate {
        max_age: 600,
        stale_while_revalidate: 3600,
    };
    pub const PORTFOLIO: Revalidate = Revalidate {
        max_age: 3600,
        stale_while_revalidate: 86400,
    };
    /// About, contact, venue landing pages, sitemap.
    pub const STATIC: Revalidate = Revalidate {
        max_age: 86400,
        stale_while_revalidate: 604800,
    };

    pub fn header_value(&self) -> String {
        format!(
            "public, s-maxage={}, stale-while-revalidate={}",
            self.max_age, self.stale_while_revalidate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_shape() {
        assert_eq!(
            Revalidate::BLOG.header_value(),
            "public, s-maxage=600, stale-while-revalidate=3600"
        );
    }
}
