//! Footer data types.
//!
//! Everything the footer shows is literal data. [`FooterContent::default`]
//! holds the storefront's own lists; hosts (or a `footer.toml`) may replace
//! any part of it before rendering.
//!
//! # Example
//!
//! ```rust
//! use ruwaid_footer::types::{FooterContent, NavLink};
//!
//! let content = FooterContent {
//!     quick_links: vec![NavLink::new("Home", "/"), NavLink::new("Sale", "/sale")],
//!     ..Default::default()
//! };
//! assert!(content.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FooterError;

/// Shop page used as the base of every brand filter link.
pub const SHOP_BRAND_PREFIX: &str = "/shop?brand=";

/// A plain brand label, rendered as a filtered shop link.
pub type BrandTag = String;

/// A (label, target path) pair used for in-app navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible link text
    pub name: String,
    /// Navigation target handed to the router as-is
    pub path: String,
}

impl NavLink {
    /// Convenience constructor for literal lists.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Which inline icon a social placeholder shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
    /// Twitter / X
    Twitter,
    /// YouTube
    Youtube,
}

/// A social network placeholder. Always rendered with `href="#"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Accessible label (`aria-label`)
    pub name: String,
    /// Icon to draw
    pub icon: SocialIcon,
}

impl SocialLink {
    fn new(name: &str, icon: SocialIcon) -> Self {
        Self {
            name: name.to_string(),
            icon,
        }
    }
}

/// Store contact details shown in the contact column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    /// Postal address, plain text
    pub address: String,
    /// Phone number, also used for the `tel:` link
    pub phone: String,
    /// Email address, also used for the `mailto:` link
    pub email: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            address: "Shop 14, Liberty Market, Gulberg III, Lahore, Pakistan".into(),
            phone: "+92 300 1234567".into(),
            email: "info@ruwaidsclothing.com".into(),
        }
    }
}

impl ContactDetails {
    /// `tel:` target with spaces stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }

    /// `mailto:` target.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the footer renders.
///
/// `#[serde(default)]` lets a config file override single fields and keep
/// the storefront literals for the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    /// Store name, used in the brand block and the copyright line
    pub store_name: String,
    /// One-sentence pitch under the store name
    pub tagline: String,
    /// "Quick Links" column
    pub quick_links: Vec<NavLink>,
    /// "Customer Service" column
    pub customer_service: Vec<NavLink>,
    /// Brand filter tags
    pub brands: Vec<BrandTag>,
    /// "Contact Us" column
    pub contact: ContactDetails,
    /// Social placeholders in the brand block
    pub socials: Vec<SocialLink>,
    /// Paragraph under the copyright line
    pub disclaimer: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            store_name: "Ruwaid's Clothing".into(),
            tagline: "Premium Pakistani fashion for every occasion. Authentic brands, delivered to your door."
                .into(),
            quick_links: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Shop", "/shop"),
                NavLink::new("About Us", "/about"),
                NavLink::new("Contact", "/contact"),
            ],
            customer_service: vec![
                NavLink::new("Track Order", "/track-order"),
                NavLink::new("Returns & Exchanges", "/returns"),
                NavLink::new("Shipping Policy", "/shipping"),
                NavLink::new("FAQs", "/faq"),
            ],
            brands: [
                "Gul Ahmed",
                "Khaadi",
                "Sana Safinaz",
                "Maria B",
                "Alkaram Studio",
                "Sapphire",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            contact: ContactDetails::default(),
            socials: vec![
                SocialLink::new("Facebook", SocialIcon::Facebook),
                SocialLink::new("Instagram", SocialIcon::Instagram),
                SocialLink::new("Twitter", SocialIcon::Twitter),
                SocialLink::new("YouTube", SocialIcon::Youtube),
            ],
            disclaimer: "Prices and availability are subject to change without notice. \
                Product colours may vary slightly due to photography and screen settings."
                .into(),
        }
    }
}

/// List names, used for `data-list` attributes and error messages.
pub mod list {
    /// Quick links column
    pub const QUICK_LINKS: &str = "quick-links";
    /// Customer service column
    pub const CUSTOMER_SERVICE: &str = "customer-service";
    /// Brand tags row
    pub const BRANDS: &str = "brands";
    /// Social placeholders
    pub const SOCIALS: &str = "socials";
}

/// One outbound navigation target, in render order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTarget {
    /// Which list the link belongs to (see [`list`])
    pub list: String,
    /// Visible text
    pub label: String,
    /// Target handed to the router
    pub href: String,
}

/// Shop filter target for a brand. The label is appended verbatim.
pub fn brand_href(brand: &str) -> String {
    format!("{}{}", SHOP_BRAND_PREFIX, brand)
}

impl FooterContent {
    /// Every router-bound target: quick links, customer service, then brands.
    /// Social placeholders and `tel:`/`mailto:` links are not router targets.
    pub fn navigation_targets(&self) -> Vec<NavTarget> {
        let nav = |list_name: &str, links: &[NavLink]| {
            links
                .iter()
                .map(|link| NavTarget {
                    list: list_name.to_string(),
                    label: link.name.clone(),
                    href: link.path.clone(),
                })
                .collect::<Vec<_>>()
        };

        let mut targets = nav(list::QUICK_LINKS, &self.quick_links);
        targets.extend(nav(list::CUSTOMER_SERVICE, &self.customer_service));
        targets.extend(self.brands.iter().map(|brand| NavTarget {
            list: list::BRANDS.to_string(),
            label: brand.clone(),
            href: brand_href(brand),
        }));
        targets
    }

    /// Check that every list has non-empty entries with unique rendering keys
    /// (path for links, the label for brands, the name for socials).
    pub fn validate(&self) -> Result<(), FooterError> {
        check_links(list::QUICK_LINKS, &self.quick_links)?;
        check_links(list::CUSTOMER_SERVICE, &self.customer_service)?;

        for (index, brand) in self.brands.iter().enumerate() {
            if brand.trim().is_empty() {
                return Err(FooterError::EmptyField {
                    list: list::BRANDS,
                    index,
                    field: "brand",
                });
            }
        }
        check_unique(list::BRANDS, self.brands.iter().map(String::as_str))?;

        for (index, social) in self.socials.iter().enumerate() {
            if social.name.trim().is_empty() {
                return Err(FooterError::EmptyField {
                    list: list::SOCIALS,
                    index,
                    field: "name",
                });
            }
        }
        check_unique(list::SOCIALS, self.socials.iter().map(|s| s.name.as_str()))
    }
}

fn check_links(list_name: &'static str, links: &[NavLink]) -> Result<(), FooterError> {
    for (index, link) in links.iter().enumerate() {
        if link.name.trim().is_empty() {
            return Err(FooterError::EmptyField {
                list: list_name,
                index,
                field: "name",
            });
        }
        if link.path.trim().is_empty() {
            return Err(FooterError::EmptyField {
                list: list_name,
                index,
                field: "path",
            });
        }
    }
    check_unique(list_name, links.iter().map(|l| l.path.as_str()))
}

fn check_unique<'a>(
    list_name: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), FooterError> {
    let mut seen = std::collections::HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(FooterError::DuplicateKey {
                list: list_name,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
