//! Contact column.

use leptos::prelude::*;

use super::{ICON_ENVELOPE, ICON_MAP_PIN, ICON_PHONE, Icon};
use crate::types::ContactDetails;

/// Address, phone and email rows. Phone and email are `tel:`/`mailto:` links.
#[component]
pub fn ContactList(contact: ContactDetails) -> impl IntoView {
    let phone_href = contact.phone_href();
    let email_href = contact.email_href();

    view! {
        <div class="footer-column">
            <h3 class="footer-heading">"Contact Us"</h3>
            <ul class="footer-contact">
                <li class="footer-contact-item" data-contact="address">
                    <Icon path=ICON_MAP_PIN size="16" class="footer-contact-icon" />
                    <span>{contact.address}</span>
                </li>
                <li class="footer-contact-item" data-contact="phone">
                    <Icon path=ICON_PHONE size="16" class="footer-contact-icon" />
                    <a class="footer-link" href=phone_href>{contact.phone}</a>
                </li>
                <li class="footer-contact-item" data-contact="email">
                    <Icon path=ICON_ENVELOPE size="16" class="footer-contact-icon" />
                    <a class="footer-link" href=email_href>{contact.email}</a>
                </li>
            </ul>
        </div>
    }
}
