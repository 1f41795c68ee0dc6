use iconkit_catalog::IconRegistry;
use yew::prelude::*;

use super::IconSvg;

#[derive(Properties, PartialEq)]
pub(crate) struct IconGlyphProps {
    /// Registry slug of the glyph.
    pub(crate) name: AttrValue,
}

/// Small registry icon used inside buttons; unknown names render nothing.
#[function_component(IconGlyph)]
pub(crate) fn icon_glyph(props: &IconGlyphProps) -> Html {
    IconRegistry::bundled()
        .get(&props.name)
        .map(|icon| html! { <IconSvg svg={icon.svg.clone()} class="icon" /> })
        .unwrap_or_default()
}
