//! Inline SVG markup from the registry.

use gloo::utils::document;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconSvgProps {
    /// Raw `<svg>` markup.
    pub(crate) svg: AttrValue,
    /// Class list for the wrapper, e.g. the stroke class `s-w-150`.
    #[prop_or_default]
    pub(crate) class: AttrValue,
}

/// Registry markup is trusted static data, so it is injected as-is.
#[function_component(IconSvg)]
pub(crate) fn icon_svg(props: &IconSvgProps) -> Html {
    let Ok(holder) = document().create_element("span") else {
        return Html::default();
    };
    holder.set_class_name(&props.class);
    holder.set_inner_html(&props.svg);
    Html::VRef(holder.into())
}
