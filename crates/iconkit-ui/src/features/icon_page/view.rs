//! Icon detail page views.
//!
//! # Design
//! - The page resolves the slug and renders either the not-found panel or both icon panels.
//! - Panels receive the icon by value and forward clipboard writes through `on_copy`.
//! - The preview is keyed by icon name so its local state resets when the route changes.

mod preview;
mod snippet;

use std::rc::Rc;

use iconkit_catalog::{Icon, IconRegistry};
use yew::prelude::*;

use crate::components::atoms::{CopyLink, EmptyState};
use crate::config::SiteConfig;
use crate::features::icon_page::actions::CopyTarget;
use crate::features::icon_page::logic::{IconFacts, IconLookup, not_found_message, resolve_icon};
use preview::IconPreview;

#[derive(Properties, PartialEq)]
pub(crate) struct IconPageProps {
    pub(crate) slug: AttrValue,
    pub(crate) on_copy: Callback<String>,
}

#[function_component(IconPage)]
pub(crate) fn icon_page(props: &IconPageProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();

    match resolve_icon(IconRegistry::bundled(), &props.slug) {
        IconLookup::Missing { slug } => html! {
            <EmptyState title={not_found_message(slug)} />
        },
        IconLookup::Found(icon) => html! {
            <section class="section pb-0">
                <div class="container icon-preview-container">
                    <IconData
                        icon={icon.clone()}
                        config={Rc::clone(&config)}
                        on_copy={props.on_copy.clone()}
                    />
                    <IconPreview
                        key={icon.name.clone()}
                        icon={icon.clone()}
                        config={Rc::clone(&config)}
                        on_copy={props.on_copy.clone()}
                    />
                </div>
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct IconDataProps {
    pub(crate) icon: Icon,
    pub(crate) config: Rc<SiteConfig>,
    pub(crate) on_copy: Callback<String>,
}

#[function_component(IconData)]
pub(crate) fn icon_data(props: &IconDataProps) -> Html {
    let facts = Rc::new(IconFacts::new(&props.icon, &props.config));
    let copy = |target: CopyTarget| {
        let facts = Rc::clone(&facts);
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| target.copy(&facts, &on_copy))
    };

    html! {
        <div class="mb-8">
            <div class="row g-4">
                <div class="col-auto">
                    <h1 class="m-0 mb-2">
                        <CopyLink tip={CopyTarget::Name.tooltip()} onclick={copy(CopyTarget::Name)}>
                            {facts.name.clone()}
                        </CopyLink>
                    </h1>
                    <div class="list-inline-dots font-h5">
                        <div>
                            <CopyLink
                                tip={CopyTarget::ReactName.tooltip()}
                                class="link-muted"
                                onclick={copy(CopyTarget::ReactName)}
                            >
                                {facts.react_name.clone()}
                            </CopyLink>
                        </div>
                        <div>
                            <CopyLink
                                tip={CopyTarget::Unicode.tooltip()}
                                class={classes!("link-muted", "font-monospaced")}
                                onclick={copy(CopyTarget::Unicode)}
                            >
                                {facts.unicode.clone()}
                            </CopyLink>
                        </div>
                        <div>
                            <CopyLink
                                tip={CopyTarget::HtmlChar.tooltip()}
                                class={classes!("link-muted", "font-monospaced")}
                                onclick={copy(CopyTarget::HtmlChar)}
                            >
                                {facts.html_char.clone()}
                            </CopyLink>
                        </div>
                        <div>
                            <CopyLink
                                tip={CopyTarget::Webfont.tooltip()}
                                class={classes!("link-muted", "font-monospaced")}
                                onclick={copy(CopyTarget::Webfont)}
                            >
                                {"<i class=\""}
                                <span class="text-base">{facts.webfont_class.clone()}</span>
                                {"\"></i>"}
                            </CopyLink>
                        </div>
                    </div>
                </div>
                <div class="col-auto ml-auto text-right">
                    <div class="list-inline-dots font-h5">
                        <div>
                            <span class="text-muted">{"Category:\u{a0}"}</span>
                            {facts.category.clone()}
                        </div>
                        <div>
                            <span class="text-muted">{"Added:\u{a0}"}</span>
                            <a class="link-muted" href={facts.changelog_href.clone()}>
                                {" "}
                                {facts.version.clone()}
                            </a>
                        </div>
                    </div>
                    <div class="mt-3">
                        <div class="tags-list">
                            { for facts.tags.iter().map(|tag| html! {
                                <span key={tag.clone()} class="tag tag-sm">{tag.clone()}</span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
