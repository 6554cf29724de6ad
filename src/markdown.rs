use pulldown_cmark::{html, Options, Parser};

/// Turns a fetched Markdown document into markup for the report viewer.
pub trait MarkdownRenderer {
    fn render(&self, source: &str) -> String;
}

/// CommonMark plus the GitHub extensions write-ups tend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonMark;

impl MarkdownRenderer for CommonMark {
    fn render(&self, source: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);

        let parser = Parser::new_ext(source, options);
        let mut markup = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut markup, parser);
        markup
    }
}
