use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TabProps {
    pub(crate) label: AttrValue,
    pub(crate) index: usize,
    #[prop_or_default]
    pub(crate) active: bool,
    #[prop_or_default]
    pub(crate) onselect: Callback<usize>,
}

#[function_component(Tab)]
pub(crate) fn tab(props: &TabProps) -> Html {
    let classes = classes!("tab", props.active.then_some("active"));
    let onclick = {
        let onselect = props.onselect.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| onselect.emit(index))
    };
    html! {
        <a class={classes} onclick={onclick}>
            {props.label.clone()}
        </a>
    }
}
