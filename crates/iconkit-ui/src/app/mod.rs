use crate::components::atoms::EmptyState;
use crate::config::SiteConfig;
use crate::features::catalog::view::CatalogIndex;
use crate::features::icon_page::view::IconPage;
use crate::routes::Route;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

mod clipboard;

#[function_component(IconKitApp)]
pub(crate) fn iconkit_app() -> Html {
    let config = use_memo(|()| load_site_config(), ());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Catalog => html! { <CatalogIndex /> },
        Route::Icon { slug } => html! {
            <IconPage slug={slug} on_copy={Callback::from(|text: String| clipboard::copy_text(&text))} />
        },
        Route::NotFound => html! {
            <EmptyState
                title="Page not found"
                description="The requested page does not exist."
            />
        },
    }
}

fn load_site_config() -> SiteConfig {
    SiteConfig::bundled().unwrap_or_else(|err| {
        console::error!("site configuration invalid; using defaults", format!("{err:?}"));
        SiteConfig::default()
    })
}

/// Mount the application onto `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<IconKitApp>::with_root(root).render();
    } else {
        yew::Renderer::<IconKitApp>::new().render();
    }
}
