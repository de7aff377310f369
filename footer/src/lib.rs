//! # ruwaid-footer
//!
//! The Ruwaid's Clothing storefront footer as a [Leptos](https://leptos.dev/)
//! component.
//!
//! The footer is static: a brand block with social placeholders, a quick-links
//! column, a customer-service column, a contact column, a row of brand filter
//! tags and a legal bar with the current year. It takes no required input.
//!
//! It can be used two ways:
//!
//! - **Client-side** - mount [`components::Footer`] inside a host page. Links
//!   are plain anchors, so a `leptos_router` `<Router>` around the page turns
//!   clicks into client-side navigation.
//! - **Static HTML** - render it through Leptos SSR with [`render_footer`] or
//!   [`render_page`] (feature `ssr`, on by default).
//!
//! ## Quick Start
//!
//! ```rust
//! use ruwaid_footer::{render_footer, types::FooterContent};
//!
//! let html = render_footer(&FooterContent::default(), 2025);
//! assert!(html.contains("2025 Ruwaid's Clothing. All rights reserved."));
//! assert!(html.contains(r#"href="/shop?brand=Gul Ahmed""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - footer content and navigation targets
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`config`] - optional `footer.toml` overrides
//! - [`clock`] - current year
//! - [`error`] - config and validation errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod styles;
pub mod types;

pub use clock::current_year;
pub use components::copyright_line;
pub use config::FooterConfig;
pub use error::FooterError;
pub use types::{FooterContent, NavLink, NavTarget, brand_href};

#[cfg(feature = "ssr")]
use components::{Footer, FooterDocument};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the `<footer>` element to an HTML fragment.
///
/// Same content and year always give the same string.
///
/// ```rust
/// use ruwaid_footer::{render_footer, FooterContent};
///
/// let html = render_footer(&FooterContent::default(), 2031);
/// assert!(html.contains(r#"<footer class="site-footer""#));
/// assert!(html.contains("2031"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_footer(content: &FooterContent, year: i32) -> String {
    let view = view! { <Footer content=content.clone() year=year /> };
    view.to_html()
}

/// Render the default footer with the year read from the clock right now.
#[cfg(feature = "ssr")]
pub fn render_footer_now() -> String {
    render_footer(&FooterContent::default(), current_year())
}

/// Render a standalone HTML page (with CSS) containing only the footer.
///
/// Leptos doesn't emit a DOCTYPE, so one is prepended.
#[cfg(feature = "ssr")]
pub fn render_page(content: &FooterContent, year: i32) -> String {
    let doc = view! { <FooterDocument content=content.clone() year=year /> };
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
