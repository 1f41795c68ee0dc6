use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::features::icon_page::state::StrokeWidth;

#[derive(Properties, PartialEq)]
pub(crate) struct StrokeRangeProps {
    pub(crate) value: StrokeWidth,
    /// Raw slider value on every input event.
    #[prop_or_default]
    pub(crate) oninput: Callback<String>,
}

#[function_component(StrokeRange)]
pub(crate) fn stroke_range(props: &StrokeRangeProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <input
            type="range"
            class="form-range"
            min={StrokeWidth::MIN.to_string()}
            max={StrokeWidth::MAX.to_string()}
            step={StrokeWidth::STEP.to_string()}
            value={props.value.to_string()}
            oninput={oninput}
        />
    }
}
