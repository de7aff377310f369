//! Rendered footer against the storefront content.

use pretty_assertions::assert_eq;
use ruwaid_footer::types::list;
use ruwaid_footer::{FooterContent, brand_href, current_year, render_footer};

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

fn data_list(name: &str) -> String {
    format!(r#"data-list="{}""#, name)
}

#[test]
fn renders_exact_list_sizes() {
    let html = render_footer(&FooterContent::default(), 2025);

    assert_eq!(count(&html, &data_list(list::QUICK_LINKS)), 4);
    assert_eq!(count(&html, &data_list(list::CUSTOMER_SERVICE)), 4);
    assert_eq!(count(&html, &data_list(list::BRANDS)), 6);
}

#[test]
fn renders_literal_link_text_and_targets() {
    let html = render_footer(&FooterContent::default(), 2025);

    for (name, path) in [
        ("Home", "/"),
        ("Shop", "/shop"),
        ("About Us", "/about"),
        ("Contact", "/contact"),
        ("Track Order", "/track-order"),
        ("Shipping Policy", "/shipping"),
        ("FAQs", "/faq"),
    ] {
        assert!(html.contains(name), "missing link text {name}");
        assert!(
            html.contains(&format!(r#"href="{}""#, path)),
            "missing target {path}"
        );
    }
    // `&` is escaped by the HTML renderer
    assert!(html.contains("Returns &amp; Exchanges"));
    assert!(html.contains(r#"href="/returns""#));
}

#[test]
fn brand_targets_are_shop_prefix_plus_label() {
    let content = FooterContent::default();
    let html = render_footer(&content, 2025);

    for brand in &content.brands {
        let href = brand_href(brand);
        assert_eq!(href, format!("/shop?brand={}", brand));
        assert!(html.contains(&format!(r#"href="{}""#, href)), "{href}");
        assert!(html.contains(brand.as_str()));
    }
}

#[test]
fn gul_ahmed_target_decodes_back_to_label() {
    let html = render_footer(&FooterContent::default(), 2025);
    let href = brand_href("Gul Ahmed");
    assert!(html.contains(&format!(r#"href="{}""#, href)));

    // Browsers percent-encode the query value; decoding must give the label back.
    let (base, value) = href.split_once("brand=").unwrap();
    let navigated = format!("{}brand={}", base, urlencoding::encode(value));
    assert_eq!(navigated, "/shop?brand=Gul%20Ahmed");

    let query = navigated.split_once("brand=").map(|(_, v)| v).unwrap();
    assert_eq!(urlencoding::decode(query).unwrap(), "Gul Ahmed");
}

#[test]
fn copyright_line_carries_the_year() {
    let html = render_footer(&FooterContent::default(), 2025);

    assert!(html.contains("2025 Ruwaid's Clothing. All rights reserved."));
    assert!(html.contains("© 2025"));
    assert!(!html.contains("Â©"));
}

#[test]
fn copyright_line_matches_clock_year() {
    let year = current_year();
    let html = render_footer(&FooterContent::default(), year);
    assert!(html.contains(&format!("© {} Ruwaid's Clothing", year)));
}

#[test]
fn rerender_is_identical_for_same_year() {
    let content = FooterContent::default();
    assert_eq!(render_footer(&content, 2025), render_footer(&content, 2025));
    assert!(render_footer(&content, 2025) != render_footer(&content, 2026));
}

#[test]
fn social_placeholders_point_nowhere() {
    let html = render_footer(&FooterContent::default(), 2025);

    assert_eq!(count(&html, r#"class="footer-social""#), 4);
    assert_eq!(count(&html, r##"href="#""##), 4);
    for label in ["Facebook", "Instagram", "Twitter", "YouTube"] {
        assert!(html.contains(&format!(r#"aria-label="{}""#, label)), "{label}");
    }
}

#[test]
fn contact_details_render_with_links() {
    let html = render_footer(&FooterContent::default(), 2025);

    assert!(html.contains("Shop 14, Liberty Market, Gulberg III, Lahore, Pakistan"));
    assert!(html.contains(r#"href="tel:+923001234567""#));
    assert!(html.contains("+92 300 1234567"));
    assert!(html.contains(r#"href="mailto:info@ruwaidsclothing.com""#));
    assert!(html.contains("info@ruwaidsclothing.com"));
}

#[test]
fn disclaimer_is_rendered() {
    let html = render_footer(&FooterContent::default(), 2025);
    assert!(html.contains("Prices and availability are subject to change without notice."));
}
