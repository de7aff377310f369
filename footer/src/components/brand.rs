//! Brand identity block: store name, tagline and social placeholders.

use leptos::prelude::*;

use super::{Icon, social_icon_path};
use crate::types::SocialLink;

/// Store name, tagline and the social icon row.
#[component]
pub fn BrandBlock(store_name: String, tagline: String, socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="footer-brand">
            <h2 class="footer-store-name">{store_name}</h2>
            <p class="footer-tagline">{tagline}</p>
            <SocialIcons socials=socials />
        </div>
    }
}

/// Non-functional social anchors. Every one points at `#`.
#[component]
pub fn SocialIcons(socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="footer-socials">
            {socials.into_iter().map(|social| {
                view! {
                    <a href="#" class="footer-social" aria-label=social.name>
                        <Icon path=social_icon_path(social.icon) size="18" />
                    </a>
                }
            }).collect_view()}
        </div>
    }
}
