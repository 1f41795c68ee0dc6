use yew::prelude::*;

/// Props for a tooltip link that copies a value on click.
#[derive(Properties, PartialEq)]
pub(crate) struct CopyLinkProps {
    /// Tooltip text.
    pub(crate) tip: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Click handler.
    pub(crate) onclick: Callback<MouseEvent>,
    /// Link content.
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(CopyLink)]
pub(crate) fn copy_link(props: &CopyLinkProps) -> Html {
    html! {
        <a
            class={classes!("tooltip", props.class.clone())}
            data-title={props.tip.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}
