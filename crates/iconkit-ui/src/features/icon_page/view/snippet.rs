use yew::prelude::*;

use crate::features::icon_page::snippets::{CaptionPart, Snippet, SnippetSection, Token};

#[derive(Properties, PartialEq)]
pub(crate) struct SnippetViewProps {
    pub(crate) snippet: Snippet,
}

#[function_component(SnippetView)]
pub(crate) fn snippet_view(props: &SnippetViewProps) -> Html {
    match &props.snippet {
        Snippet::Placeholder(text) => html! { <div>{*text}</div> },
        Snippet::Sections(sections) => html! {
            <div>
                { for sections.iter().map(render_section) }
            </div>
        },
    }
}

fn render_section(section: &SnippetSection) -> Html {
    let caption = if section.caption.is_empty() {
        Html::default()
    } else {
        html! {
            <p class="mb-2">
                { for section.caption.iter().map(|part| match part {
                    CaptionPart::Text(text) => html! { {text.clone()} },
                    CaptionPart::Code(code) => html! { <code>{code.clone()}</code> },
                }) }
            </p>
        }
    };
    html! {
        <>
            {caption}
            <pre class={section.pre_class()}>
                <code>{ for section.tokens.iter().map(render_token) }</code>
            </pre>
        </>
    }
}

fn render_token(token: &Token) -> Html {
    match token.kind.css_class() {
        Some(class) => html! { <span class={class}>{token.text.clone()}</span> },
        None => html! { {token.text.clone()} },
    }
}
