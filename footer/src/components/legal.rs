//! Bottom legal bar.

use leptos::prelude::*;

/// `© {year} {store}. All rights reserved.`
///
/// Built as one string so SSR emits it as a single text node.
pub fn copyright_line(year: i32, store_name: &str) -> String {
    format!("\u{a9} {} {}. All rights reserved.", year, store_name)
}

/// Copyright line and disclaimer paragraph.
#[component]
pub fn LegalBar(store_name: String, year: i32, disclaimer: String) -> impl IntoView {
    view! {
        <div class="footer-bottom">
            <p class="footer-copyright">{copyright_line(year, &store_name)}</p>
            <p class="footer-disclaimer">{disclaimer}</p>
        </div>
    }
}
