//! Leptos components that make up the footer.
//!
//! # Component Hierarchy
//!
//! ```text
//! FooterDocument (standalone preview page)
//! └── Footer
//!     ├── BrandBlock
//!     │   └── SocialIcons
//!     ├── LinkColumn (quick links)
//!     ├── LinkColumn (customer service)
//!     ├── ContactList
//!     ├── BrandTags
//!     └── LegalBar
//! ```
//!
//! Hosts normally only need [`Footer`]:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use ruwaid_footer::components::Footer;
//!
//! view! { <main>...</main> <Footer /> }
//! ```

mod brand;
mod contact;
mod document;
mod footer;
mod icons;
mod legal;
mod links;

pub use brand::{BrandBlock, SocialIcons};
pub use contact::ContactList;
pub use document::FooterDocument;
pub use footer::Footer;
pub use icons::*;
pub use legal::{LegalBar, copyright_line};
pub use links::{BrandTags, LinkColumn};
