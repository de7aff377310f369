//! Link lists: the titled navigation columns and the brand tag row.
//!
//! Targets are plain `href`s. A client-side router on the host page
//! intercepts the clicks; nothing here resolves or checks a path.

use leptos::prelude::*;

use crate::types::{BrandTag, NavLink, brand_href, list};

/// A titled column of navigation links.
///
/// `list` ends up in `data-list` on every anchor so hosts and tests can tell
/// the columns apart.
#[component]
pub fn LinkColumn(
    /// Column heading
    title: &'static str,
    /// List name for `data-list`
    list: &'static str,
    /// Links in display order
    links: Vec<NavLink>,
) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3 class="footer-heading">{title}</h3>
            <ul class="footer-links">
                {links.into_iter().map(|link| {
                    view! {
                        <li>
                            <a class="footer-link" data-list=list href=link.path>
                                {link.name}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Brand labels, each linking to the shop filtered by that brand.
#[component]
pub fn BrandTags(brands: Vec<BrandTag>) -> impl IntoView {
    view! {
        <div class="footer-brands">
            <h3 class="footer-heading">"Our Brands"</h3>
            <div class="footer-brand-tags">
                {brands.into_iter().map(|brand| {
                    let href = brand_href(&brand);
                    view! {
                        <a class="footer-brand-tag" data-list=list::BRANDS href=href>
                            {brand}
                        </a>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
