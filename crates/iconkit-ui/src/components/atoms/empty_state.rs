//! Section-wide message panel (unknown icons, unknown routes).
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - Render the optional description only when provided.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) description: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <section class="section section-light">
            <div class="container">
                <h1>{props.title.clone()}</h1>
                {props.description.clone().map(|text| html! {
                    <p class="text-muted">{text}</p>
                }).unwrap_or_default()}
                { for props.children.iter() }
            </div>
        </section>
    }
}
