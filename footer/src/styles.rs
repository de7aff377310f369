//! CSS for the footer.
//!
//! Hosts that already ship their own stylesheet can ignore this and style the
//! `footer-*` classes themselves. To extend it:
//!
//! ```rust
//! use ruwaid_footer::styles::FOOTER_CSS;
//!
//! let my_css = ".footer-heading { letter-spacing: 0.1em; }";
//! let combined = format!("{}\n{}", FOOTER_CSS, my_css);
//! ```

/// Footer stylesheet: dark band, four-column grid collapsing to one column on
/// narrow screens, pill-shaped brand tags.
///
/// Every rule is scoped to `.site-footer` or the `.footer-preview` page so the
/// stylesheet can be injected into any host page.
pub const FOOTER_CSS: &str = r#"
.site-footer {
    --footer-bg: #111827;
    --footer-bg-raised: #1f2937;
    --footer-text: #d1d5db;
    --footer-text-dim: #9ca3af;
    --footer-heading: #ffffff;
    --footer-accent: #f59e0b;
    --footer-border: #374151;
}

.site-footer,
.site-footer * { box-sizing: border-box; }

body.footer-preview {
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

.footer-preview-main { flex: 1; }

.site-footer {
    background: var(--footer-bg);
    color: var(--footer-text);
    padding: 48px 0 24px;
    font-size: 14px;
    line-height: 1.6;
}

.footer-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 32px;
}

.footer-store-name {
    margin: 0 0 12px;
    color: var(--footer-heading);
    font-size: 22px;
    font-weight: 700;
}

.footer-tagline {
    margin: 0 0 16px;
    color: var(--footer-text-dim);
}

.footer-socials {
    display: flex;
    gap: 12px;
}

.footer-social {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 36px;
    height: 36px;
    border-radius: 50%;
    background: var(--footer-bg-raised);
    color: var(--footer-text);
    transition: background 0.2s, color 0.2s;
}

.footer-social:hover {
    background: var(--footer-accent);
    color: var(--footer-bg);
}

.footer-heading {
    margin: 0 0 16px;
    color: var(--footer-heading);
    font-size: 16px;
    font-weight: 600;
}

.footer-links,
.footer-contact {
    list-style: none;
    margin: 0;
    padding: 0;
}

.footer-links li,
.footer-contact li {
    margin-bottom: 8px;
}

.footer-link {
    color: var(--footer-text);
    text-decoration: none;
    transition: color 0.2s;
}

.footer-link:hover { color: var(--footer-accent); }

.footer-contact-item {
    display: flex;
    align-items: flex-start;
    gap: 8px;
}

.footer-contact-icon {
    flex-shrink: 0;
    margin-top: 3px;
    color: var(--footer-accent);
}

.footer-brands {
    margin-top: 40px;
    padding-top: 24px;
    border-top: 1px solid var(--footer-border);
}

.footer-brand-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
}

.footer-brand-tag {
    padding: 4px 14px;
    border: 1px solid var(--footer-border);
    border-radius: 999px;
    color: var(--footer-text);
    text-decoration: none;
    font-size: 13px;
    transition: border-color 0.2s, color 0.2s;
}

.footer-brand-tag:hover {
    border-color: var(--footer-accent);
    color: var(--footer-accent);
}

.footer-bottom {
    margin-top: 32px;
    padding-top: 24px;
    border-top: 1px solid var(--footer-border);
    text-align: center;
}

.footer-copyright {
    margin: 0 0 8px;
    color: var(--footer-text);
}

.footer-disclaimer {
    margin: 0;
    color: var(--footer-text-dim);
    font-size: 12px;
}

@media (max-width: 900px) {
    .footer-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (max-width: 560px) {
    .footer-grid { grid-template-columns: 1fr; }
    .footer-socials { justify-content: flex-start; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_has_no_global_rules() {
        assert!(!FOOTER_CSS.contains(":root"));
        assert!(!FOOTER_CSS.contains("\n* {"));
        assert!(!FOOTER_CSS.contains("\nbody {"));
        assert!(FOOTER_CSS.contains(".site-footer * { box-sizing: border-box; }"));
    }

    #[test]
    fn every_selector_is_footer_scoped() {
        let selectors = FOOTER_CSS
            .lines()
            .map(str::trim)
            .filter(|line| line.ends_with('{') || line.ends_with(','))
            .filter(|line| !line.starts_with("@media"));

        for selector in selectors {
            let selector = selector.trim_end_matches(['{', ',']).trim();
            assert!(
                selector.starts_with(".site-footer")
                    || selector.starts_with(".footer-")
                    || selector.starts_with("body.footer-preview"),
                "unscoped selector {selector:?}"
            );
        }
    }
}
