//! The storefront footer.
//!
//! Layout:
//!
//! ```text
//! <footer>
//! ├── grid
//! │   ├── BrandBlock      (name, tagline, SocialIcons)
//! │   ├── LinkColumn      "Quick Links"
//! │   ├── LinkColumn      "Customer Service"
//! │   └── ContactList     "Contact Us"
//! ├── BrandTags           "Our Brands"
//! └── LegalBar            copyright + disclaimer
//! ```

use leptos::prelude::*;

use super::{BrandBlock, BrandTags, ContactList, LegalBar, LinkColumn};
use crate::clock::current_year;
use crate::types::{FooterContent, list};

/// Storefront footer.
///
/// With no props it renders the storefront's literal content and the year
/// read from the system clock at render time.
///
/// Supplied `content` is not validated here; run [`FooterContent::validate`]
/// first (config loading does). Debug builds assert it.
#[component]
pub fn Footer(
    /// Replacement content (defaults to the storefront literals)
    #[prop(optional)]
    content: Option<FooterContent>,
    /// Pinned year (defaults to the current year)
    #[prop(optional)]
    year: Option<i32>,
) -> impl IntoView {
    let content = content.unwrap_or_default();
    debug_assert!(
        content.validate().is_ok(),
        "invalid footer content: {:?}",
        content.validate()
    );

    let FooterContent {
        store_name,
        tagline,
        quick_links,
        customer_service,
        brands,
        contact,
        socials,
        disclaimer,
    } = content;
    let year = year.unwrap_or_else(current_year);

    tracing::trace!(year, store = %store_name, "rendering footer");

    view! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-grid">
                    <BrandBlock store_name=store_name.clone() tagline=tagline socials=socials />
                    <LinkColumn title="Quick Links" list=list::QUICK_LINKS links=quick_links />
                    <LinkColumn
                        title="Customer Service"
                        list=list::CUSTOMER_SERVICE
                        links=customer_service
                    />
                    <ContactList contact=contact />
                </div>
                <BrandTags brands=brands />
                <LegalBar store_name=store_name year=year disclaimer=disclaimer />
            </div>
        </footer>
    }
}
