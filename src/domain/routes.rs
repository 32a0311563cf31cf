//! Cache paths and tags derived from a post slug.
//!
//! The CMS renders posts under `/posts/{slug}` while the portfolio site
//! mirrors them under `/blog/{slug}`.

/// Collection name reported to the portfolio site.
pub const POSTS_COLLECTION: &str = "posts";
/// Tag the portfolio site uses for post listings.
pub const POSTS_TAG: &str = "posts";
/// Local tag shared by every cached sitemap fragment that lists posts.
pub const POSTS_SITEMAP_TAG: &str = "posts-sitemap";

const LOCAL_POSTS_PREFIX: &str = "/posts";
const PORTFOLIO_POSTS_PREFIX: &str = "/blog";

pub fn local_post_path(slug: &str) -> String {
    format!("{LOCAL_POSTS_PREFIX}/{slug}")
}

pub fn portfolio_post_path(slug: &str) -> String {
    format!("{PORTFOLIO_POSTS_PREFIX}/{slug}")
}
