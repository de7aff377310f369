// Placeholder pages so footer links have somewhere to land.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_query_map};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Ruwaid's Clothing"</h1>
            <p>"Premium Pakistani fashion for every occasion."</p>
        </section>
    }
}

/// `/shop`, optionally filtered by `?brand=`.
#[component]
pub fn ShopPage() -> impl IntoView {
    let query = use_query_map();
    let brand = move || query.read().get("brand");

    view! {
        <section class="page">
            <h1>"Shop"</h1>
            {move || match brand() {
                Some(brand) => view! { <p class="shop-filter">{format!("Brand: {}", brand)}</p> }.into_any(),
                None => view! { <p>"All brands"</p> }.into_any(),
            }}
        </section>
    }
}

/// Every other footer target (about, contact, customer service pages).
#[component]
pub fn PlaceholderPage() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="page">
            <h1>{move || location.pathname.get()}</h1>
            <p>"Coming soon."</p>
        </section>
    }
}
