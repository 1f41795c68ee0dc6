//! Code snippet renderers for each tab.
//!
//! # Design
//! - Renderers are pure functions of the icon and site config.
//! - Output is structured (captions and classed tokens) so the view only maps it to markup.
//! - Token classes follow the Pygments short names used by the site stylesheet.

use iconkit_catalog::{Icon, css_content, react_name, scss_variable};

use crate::config::SiteConfig;
use crate::features::icon_page::state::SnippetKind;

/// Syntax class of a code token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Unstyled text.
    Plain,
    /// Keyword (`import`, `@import`).
    Keyword,
    /// Punctuation.
    Punctuation,
    /// Imported identifier.
    Name,
    /// String delimiter.
    Delimiter,
    /// Single-quoted string body.
    SingleQuoted,
    /// Double-quoted string.
    DoubleQuoted,
    /// Secondary string style.
    Quoted,
    /// Markup tag.
    Tag,
    /// Markup attribute.
    Attribute,
}

impl TokenKind {
    /// Stylesheet class for the token, if any.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Keyword => Some("k"),
            Self::Punctuation => Some("p"),
            Self::Name => Some("nx"),
            Self::Delimiter => Some("dl"),
            Self::SingleQuoted => Some("s1"),
            Self::DoubleQuoted => Some("s"),
            Self::Quoted => Some("s2"),
            Self::Tag => Some("nt"),
            Self::Attribute => Some("na"),
        }
    }
}

/// A run of code text with one syntax class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Syntax class.
    pub kind: TokenKind,
    /// Literal text.
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Part of a caption above a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptionPart {
    /// Prose.
    Text(String),
    /// Inline code.
    Code(String),
}

/// One captioned code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetSection {
    /// Caption shown above the block.
    pub caption: Vec<CaptionPart>,
    /// Code tokens in order.
    pub tokens: Vec<Token>,
    /// Whether the block gets syntax highlighting chrome.
    pub highlighted: bool,
    /// Whether the block drops its bottom margin.
    pub flush: bool,
}

impl SnippetSection {
    const fn new(caption: Vec<CaptionPart>, tokens: Vec<Token>) -> Self {
        Self {
            caption,
            tokens,
            highlighted: true,
            flush: false,
        }
    }

    const fn plain(mut self) -> Self {
        self.highlighted = false;
        self
    }

    const fn flush(mut self) -> Self {
        self.flush = true;
        self
    }

    /// Class list for the `<pre>` element.
    #[must_use]
    pub const fn pre_class(&self) -> &'static str {
        match (self.highlighted, self.flush) {
            (true, true) => "highlight m-0",
            (true, false) => "highlight",
            (false, true) => "mb-0",
            (false, false) => "",
        }
    }
}

/// Rendered content of one tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Snippet {
    /// Tab without real content yet.
    Placeholder(&'static str),
    /// Captioned code blocks.
    Sections(Vec<SnippetSection>),
}

impl SnippetKind {
    /// Render this tab for an icon.
    #[must_use]
    pub fn render(self, icon: &Icon, config: &SiteConfig) -> Snippet {
        match self {
            Self::Svg => svg_code(icon),
            Self::Jsx => Snippet::Placeholder("JSX"),
            Self::DataUri => Snippet::Placeholder("URI"),
            Self::React => package_code(&icon.name, &config.react_package, config),
            Self::Vue => package_code(&icon.name, &config.vue_package, config),
            Self::Webfont => webfont_code(&icon.name, &icon.unicode, config),
            Self::Scss => scss_code(&icon.name, config),
        }
    }
}

/// Raw SVG markup.
#[must_use]
pub fn svg_code(icon: &Icon) -> Snippet {
    Snippet::Sections(vec![
        SnippetSection::new(
            Vec::new(),
            vec![Token::new(TokenKind::Plain, icon.svg.clone())],
        )
        .flush(),
    ])
}

/// Install and import instructions for a component package.
#[must_use]
pub fn package_code(icon_name: &str, package: &str, config: &SiteConfig) -> Snippet {
    let install = SnippetSection::new(
        vec![
            CaptionPart::Text("Install ".into()),
            CaptionPart::Code(package.into()),
            CaptionPart::Text(":".into()),
        ],
        vec![Token::new(
            TokenKind::Plain,
            format!("{} {package}", config.install_command),
        )],
    );
    let import = SnippetSection::new(
        vec![CaptionPart::Text("Import icon:".into())],
        vec![
            Token::new(TokenKind::Keyword, "import "),
            Token::new(TokenKind::Punctuation, "{ "),
            Token::new(TokenKind::Name, react_name(icon_name)),
            Token::new(TokenKind::Punctuation, " } "),
            Token::new(TokenKind::Keyword, "from "),
            Token::new(TokenKind::Delimiter, "'"),
            Token::new(TokenKind::SingleQuoted, package),
            Token::new(TokenKind::Delimiter, "'"),
            Token::new(TokenKind::Punctuation, ";"),
        ],
    )
    .flush();
    Snippet::Sections(vec![install, import])
}

/// Stylesheet link plus HTML and CSS usage of the webfont.
#[must_use]
pub fn webfont_code(icon_name: &str, unicode: &str, config: &SiteConfig) -> Snippet {
    let prefix = &config.class_prefix;
    let link = SnippetSection::new(
        vec![CaptionPart::Text("Stylesheet url:".into())],
        vec![
            Token::new(TokenKind::Tag, "<link "),
            Token::new(TokenKind::Attribute, "rel="),
            Token::new(TokenKind::DoubleQuoted, "\"stylesheet\" "),
            Token::new(TokenKind::Attribute, "href="),
            Token::new(
                TokenKind::DoubleQuoted,
                format!("\"{}\"", config.webfont_stylesheet),
            ),
            Token::new(TokenKind::Tag, ">"),
        ],
    );
    let html = SnippetSection::new(
        vec![CaptionPart::Text("Usage in HTML:".into())],
        vec![
            Token::new(TokenKind::Tag, "<i "),
            Token::new(TokenKind::Attribute, "class="),
            Token::new(
                TokenKind::DoubleQuoted,
                format!("\"{prefix} {prefix}-{icon_name}\""),
            ),
            Token::new(TokenKind::Tag, "></i>"),
        ],
    );
    let css = SnippetSection::new(
        vec![CaptionPart::Text("Usage in CSS:".into())],
        vec![Token::new(TokenKind::Plain, css_content(unicode))],
    )
    .plain()
    .flush();
    Snippet::Sections(vec![link, html, css])
}

/// SCSS import plus variable usage.
#[must_use]
pub fn scss_code(icon_name: &str, config: &SiteConfig) -> Snippet {
    let import = SnippetSection::new(
        vec![CaptionPart::Text("SCSS file:".into())],
        vec![
            Token::new(TokenKind::Keyword, "@import "),
            Token::new(TokenKind::Quoted, format!("'{}'", config.scss_import)),
            Token::new(TokenKind::Punctuation, ";"),
        ],
    );
    let usage = SnippetSection::new(
        vec![CaptionPart::Text("Usage in SCSS:".into())],
        vec![Token::new(
            TokenKind::Plain,
            format!(
                "content: {}",
                scss_variable(&config.class_prefix, icon_name)
            ),
        )],
    )
    .plain();
    Snippet::Sections(vec![import, usage])
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconkit_test_support::fixtures::{arrow_left_icon, home_icon};

    fn sections(snippet: &Snippet) -> &[SnippetSection] {
        match snippet {
            Snippet::Sections(sections) => sections,
            Snippet::Placeholder(text) => panic!("unexpected placeholder {text}"),
        }
    }

    fn code_blocks(snippet: &Snippet) -> Vec<String> {
        sections(snippet)
            .iter()
            .map(|section| section.tokens.iter().map(|t| t.text.as_str()).collect())
            .collect()
    }

    fn captions(snippet: &Snippet) -> Vec<String> {
        sections(snippet)
            .iter()
            .map(|section| {
                section
                    .caption
                    .iter()
                    .map(|part| match part {
                        CaptionPart::Text(text) | CaptionPart::Code(text) => text.as_str(),
                    })
                    .collect()
            })
            .collect()
    }

    fn pre_classes(snippet: &Snippet) -> Vec<&'static str> {
        sections(snippet)
            .iter()
            .map(SnippetSection::pre_class)
            .collect()
    }

    #[test]
    fn svg_tab_passes_markup_through() {
        let icon = home_icon();
        let snippet = SnippetKind::Svg.render(&icon, &SiteConfig::default());
        assert_eq!(code_blocks(&snippet), vec![icon.svg]);
        assert_eq!(pre_classes(&snippet), vec!["highlight m-0"]);
    }

    #[test]
    fn react_tab_installs_and_imports_component() {
        let snippet = SnippetKind::React.render(&arrow_left_icon(), &SiteConfig::default());
        assert_eq!(
            code_blocks(&snippet),
            vec![
                "npm install @tabler/icons-react".to_string(),
                "import { IconArrowLeft } from '@tabler/icons-react';".to_string(),
            ]
        );
        assert_eq!(
            captions(&snippet),
            vec!["Install @tabler/icons-react:".to_string(), "Import icon:".to_string()]
        );
    }

    #[test]
    fn vue_tab_uses_vue_package() {
        let snippet = SnippetKind::Vue.render(&home_icon(), &SiteConfig::default());
        assert_eq!(
            code_blocks(&snippet),
            vec![
                "npm install @tabler/icons-vue".to_string(),
                "import { IconHome } from '@tabler/icons-vue';".to_string(),
            ]
        );
    }

    #[test]
    fn webfont_tab_links_stylesheet_and_shows_usage() {
        let snippet = SnippetKind::Webfont.render(&home_icon(), &SiteConfig::default());
        assert_eq!(
            code_blocks(&snippet),
            vec![
                "<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/@tabler/icons-webfont@latest/tabler-icons.min.css\">".to_string(),
                "<i class=\"ti ti-home\"></i>".to_string(),
                "content: '\\eac1';".to_string(),
            ]
        );
        assert_eq!(
            captions(&snippet),
            vec!["Stylesheet url:", "Usage in HTML:", "Usage in CSS:"]
        );
    }

    #[test]
    fn scss_tab_imports_and_references_variable() {
        let snippet = SnippetKind::Scss.render(&home_icon(), &SiteConfig::default());
        assert_eq!(
            code_blocks(&snippet),
            vec![
                "@import 'node_modules/@tabler/icons-webfont/tabler-icons.scss';".to_string(),
                "content: $ti-icon-home".to_string(),
            ]
        );
    }

    #[test]
    fn stub_tabs_render_placeholders() {
        let icon = home_icon();
        let config = SiteConfig::default();
        assert_eq!(
            SnippetKind::Jsx.render(&icon, &config),
            Snippet::Placeholder("JSX")
        );
        assert_eq!(
            SnippetKind::DataUri.render(&icon, &config),
            Snippet::Placeholder("URI")
        );
    }

    #[test]
    fn block_margins_follow_page_layout() {
        let icon = home_icon();
        let config = SiteConfig::default();
        assert_eq!(
            pre_classes(&SnippetKind::React.render(&icon, &config)),
            vec!["highlight", "highlight m-0"]
        );
        assert_eq!(
            pre_classes(&SnippetKind::Webfont.render(&icon, &config)),
            vec!["highlight", "highlight", "mb-0"]
        );
        assert_eq!(
            pre_classes(&SnippetKind::Scss.render(&icon, &config)),
            vec!["highlight", ""]
        );
    }

    #[test]
    fn class_prefix_flows_into_snippets() {
        let config = SiteConfig {
            class_prefix: "ico".into(),
            ..SiteConfig::default()
        };
        let webfont = SnippetKind::Webfont.render(&home_icon(), &config);
        assert!(code_blocks(&webfont).contains(&"<i class=\"ico ico-home\"></i>".to_string()));
        let scss = SnippetKind::Scss.render(&home_icon(), &config);
        assert_eq!(code_blocks(&scss)[1], "content: $ico-icon-home");
    }

    #[test]
    fn token_classes_follow_stylesheet_names() {
        assert_eq!(TokenKind::Plain.css_class(), None);
        assert_eq!(TokenKind::Keyword.css_class(), Some("k"));
        assert_eq!(TokenKind::SingleQuoted.css_class(), Some("s1"));
        assert_eq!(TokenKind::Quoted.css_class(), Some("s2"));
    }
}
