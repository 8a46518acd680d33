//! Hard-coded site content: biography, projects, blog posts.
//!
//! Everything the site shows is either here or seeded in `folio-shop`. No
//! CMS, no database; editing the site means editing this file.

use chrono::NaiveDate;

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// One blog post, body in paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub excerpt: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// Short bio shown on the home and about pages.
pub const BIO_SHORT: &str = "Full-stack developer in Pune, building fast web things \
    end to end. Currently deep in Rust, WASM, and edge rendering.";

pub const BIO_LONG: &[&str] = &[
    "I'm Arjun, a full-stack developer based in Pune. I've spent the last four \
     years shipping product at a commerce startup and for freelance clients, \
     owning features from the data model to the pixel polish.",
    "These days most of my tinkering happens in Rust: compiling UIs to WASM, \
     streaming HTML from edge functions, and generally trying to make the web \
     feel instant on mid-range phones and patchy networks.",
    "Away from the keyboard I'm usually on a cricket pitch, behind a camera, or \
     hunting for the city's best filter coffee.",
];

/// The projects grid.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "kirana-storefront",
            name: "Kirana Storefront",
            summary: "Edge-rendered storefront for neighbourhood grocery stores, \
                      with streamed product pages and offline-tolerant carts.",
            stack: &["Rust", "Spin", "Leptos"],
            link: Some("https://github.com/arjunm-dev/kirana-storefront"),
        },
        Project {
            slug: "chai-time",
            name: "Chai Time",
            summary: "A tiny roster app three Pune cafes actually use: shift \
                      swaps, payday math, WhatsApp reminders.",
            stack: &["TypeScript", "React", "Supabase"],
            link: None,
        },
        Project {
            slug: "monsoon-lens",
            name: "Monsoon Lens",
            summary: "Photo-essay site with scroll-driven reveals and a build \
                      step that squeezes RAW files to 40KB without looking it.",
            stack: &["Astro", "Sharp"],
            link: Some("https://monsoonlens.in"),
        },
        Project {
            slug: "this-site",
            name: "This Site",
            summary: "The portfolio you're reading: a Leptos SPA plus four \
                      self-contained demo pages streamed from the edge.",
            stack: &["Rust", "Leptos", "Spin"],
            link: Some("https://github.com/arjunm-dev/folio"),
        },
    ]
}

/// All posts, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "shipping-a-rust-spa",
            title: "Shipping a Rust SPA without regretting it",
            date: NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date"),
            excerpt: "Six months of Leptos in production, and the parts I'd \
                      keep, swap, or quietly never mention again.",
            paragraphs: &[
                "When I rebuilt this site in Rust the goal wasn't purity, it was \
                 curiosity: could the language I use for edge services carry a \
                 whole interactive site without the usual JavaScript toolchain?",
                "Mostly, yes. Signals feel like a cleaner React, the compiler \
                 catches the silly stuff before the browser does, and WASM cold \
                 starts stopped being scary once the bundle went on a diet.",
                "The honest cost is iteration speed. A CSS tweak should not \
                 involve the Rust compiler, and sometimes it does. I'd still \
                 make the same choice, but go in knowing which loop you're \
                 optimizing for.",
            ],
        },
        BlogPost {
            slug: "cart-math-is-state-machine-math",
            title: "Cart math is state machine math",
            date: NaiveDate::from_ymd_opt(2025, 3, 2).expect("valid date"),
            excerpt: "The most interesting code in an e-commerce demo is forty \
                      lines of quantity bookkeeping.",
            paragraphs: &[
                "Every shopping cart bug I have ever fixed came down to the same \
                 two invariants: one line per product, and totals computed in \
                 one canonical currency.",
                "Hold those two, and everything else - currency toggles, \
                 pagination, discount badges - becomes pure derivation you can \
                 unit test in milliseconds.",
                "Break them, and you get the classic: a cart that shows two \
                 lines for the same SKU with different display-rounded prices, \
                 neither of which matches the checkout total.",
            ],
        },
        BlogPost {
            slug: "streaming-html-from-the-edge",
            title: "Streaming HTML from the edge, one section at a time",
            date: NaiveDate::from_ymd_opt(2024, 11, 20).expect("valid date"),
            excerpt: "Skeletons are a promise. Streamed sections are the \
                      fulfilment.",
            paragraphs: &[
                "The demo pages on this site don't wait for their slowest data \
                 source. The shell goes out immediately, then each section \
                 lands as its data arrives, slowest last.",
                "The trick is deciding up front what a section shows when its \
                 dependency fails. A weather card with a bundled city table \
                 behind it never has to show an error state at all.",
            ],
        },
    ]
}

/// Look up a post by slug.
pub fn find_post(slug: &str) -> Option<BlogPost> {
    blog_posts().into_iter().find(|p| p.slug == slug)
}

/// Format a post date for display (e.g., "14 Jun 2025").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_newest_first() {
        let posts = blog_posts();
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_slugs_unique_and_resolvable() {
        let posts = blog_posts();
        let mut slugs: Vec<&str> = posts.iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), posts.len());

        for slug in slugs {
            assert!(find_post(slug).is_some());
        }
        assert!(find_post("missing").is_none());
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(format_date(date), "14 Jun 2025");
    }
}
