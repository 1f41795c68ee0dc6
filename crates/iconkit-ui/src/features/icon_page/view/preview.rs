//! Stroke preview, toolbar, and snippet tabs.

use std::rc::Rc;

use iconkit_catalog::Icon;
use yew::prelude::*;

use super::snippet::SnippetView;
use crate::components::atoms::{IconGlyph, IconSvg, StrokeRange, Tab};
use crate::config::SiteConfig;
use crate::features::icon_page::actions::PreviewAction;
use crate::features::icon_page::state::{PreviewState, SnippetKind};

#[derive(Properties, PartialEq)]
pub(crate) struct IconPreviewProps {
    pub(crate) icon: Icon,
    pub(crate) config: Rc<SiteConfig>,
    pub(crate) on_copy: Callback<String>,
}

#[function_component(IconPreview)]
pub(crate) fn icon_preview(props: &IconPreviewProps) -> Html {
    let state = use_state(PreviewState::default);

    let on_stroke = {
        let state = state.clone();
        Callback::from(move |raw: String| state.set(state.with_stroke_input(&raw)))
    };

    let on_tab = {
        let state = state.clone();
        Callback::from(move |index: usize| state.set(state.with_tab_index(index)))
    };

    let action_button = |action: PreviewAction| {
        let icon = props.icon.clone();
        let on_copy = props.on_copy.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let _ = action.perform(&icon, &on_copy);
        });
        let classes = classes!(
            "btn",
            action.is_primary().then_some("btn-primary"),
            "w-100",
            "lg:w-auto"
        );
        let column = if action.is_primary() {
            "col-12 lg:col-auto order-last lg:order-first"
        } else {
            "col-6 lg:col-auto"
        };
        html! {
            <div class={column}>
                <a class={classes} onclick={onclick}>
                    <IconGlyph name={action.icon_name()} />
                    {" "}
                    {action.label()}
                </a>
            </div>
        }
    };

    let snippet = state.tab.render(&props.icon, &props.config);

    html! {
        <div class="icon-code-grid mb-8">
            <div>
                <div class="icon-preview icon-preview-big mx-auto">
                    <IconSvg svg={props.icon.svg.clone()} class={state.stroke.class_name()} />
                    <label class="icon-preview-slider">
                        <div class="row">
                            <div class="col-6">
                                <StrokeRange value={state.stroke} oninput={on_stroke} />
                            </div>
                            <div class="col-auto">
                                <code class="code-dark">
                                    {"stroke-width=\""}
                                    <strong>{state.stroke.to_string()}</strong>
                                    {"\""}
                                </code>
                            </div>
                        </div>
                    </label>
                </div>
            </div>
            <div class="d-flex flex-column">
                <div>
                    <div class="row g-2">
                        { for PreviewAction::all().into_iter().map(action_button) }
                    </div>
                </div>
            </div>
            <div>
                <nav class="tabs">
                    { for SnippetKind::all().into_iter().map(|tab| html! {
                        <Tab
                            key={tab.label()}
                            label={tab.label()}
                            index={tab.index()}
                            active={state.is_active(tab)}
                            onselect={on_tab.clone()}
                        />
                    }) }
                </nav>
                <div class="row">
                    <div class="col">
                        <SnippetView snippet={snippet} />
                    </div>
                </div>
            </div>
        </div>
    }
}
