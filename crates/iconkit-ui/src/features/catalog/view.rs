//! Catalog index view.
//!
//! # Design
//! - List every bundled icon in slug order; each card links to its detail route.

use gloo::console;
use iconkit_catalog::IconRegistry;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::atoms::{EmptyState, IconSvg};
use crate::routes::Route;

#[function_component(CatalogIndex)]
pub(crate) fn catalog_index() -> Html {
    let registry = IconRegistry::bundled();
    if registry.is_empty() {
        console::error!("icon registry is empty; bundled icon data failed to load");
        return html! { <EmptyState title="No icons available" /> };
    }

    html! {
        <section class="section">
            <div class="container">
                <h1 class="mb-4">{format!("{} icons", registry.len())}</h1>
                <div class="icons-grid">
                    { for registry.iter().map(|icon| html! {
                        <Link<Route>
                            key={icon.name.clone()}
                            to={Route::Icon { slug: icon.name.clone() }}
                            classes="icons-grid-item"
                        >
                            <IconSvg svg={icon.svg.clone()} class="icon" />
                            <span class="icons-grid-name">{icon.name.clone()}</span>
                        </Link<Route>>
                    }) }
                </div>
            </div>
        </section>
    }
}
