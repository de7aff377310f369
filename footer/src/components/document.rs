//! Standalone preview page wrapping the footer.

use leptos::prelude::*;

use super::Footer;
use crate::styles::FOOTER_CSS;
use crate::types::FooterContent;

/// Complete HTML document: head with the footer CSS, body with the footer
/// pushed to the bottom of the viewport.
#[component]
pub fn FooterDocument(content: FooterContent, year: i32) -> impl IntoView {
    let title = format!("{} - Footer", content.store_name);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{FOOTER_CSS}</style>
            </head>
            <body class="footer-preview">
                <main class="footer-preview-main"></main>
                <Footer content=content year=year />
            </body>
        </html>
    }
}
