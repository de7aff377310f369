// Ruwaid's Clothing storefront shell - hosts the footer under a client-side router.
// Pages are placeholders; the footer is the only real content.

mod pages;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use ruwaid_footer::components::Footer;
use ruwaid_footer::styles::FOOTER_CSS;

use pages::{HomePage, PlaceholderPage, ShopPage};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{FOOTER_CSS}</style>
        <Router>
            <main class="footer-preview-main">
                <Routes fallback=|| view! { <PlaceholderPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/shop") view=ShopPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
