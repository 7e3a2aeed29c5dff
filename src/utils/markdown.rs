//! Markdown rendering with HTML sanitization.

use pulldown_cmark::{Options, Parser, html};

/// Renders raw Markdown to sanitized HTML.
///
/// Supports tables, footnotes, strikethrough, task lists, and smart
/// punctuation. The output is passed through `ammonia` so user-supplied
/// markup cannot inject scripts or event handlers.
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(raw, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let result = render_markdown("Hello, world!");
        assert_eq!(result.trim(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading() {
        let result = render_markdown("# Title");
        assert_eq!(result.trim(), "<h1>Title</h1>");
    }

    #[test]
    fn test_bold_and_italic() {
        let result = render_markdown("**bold** and *italic*");
        assert!(result.contains("<strong>bold</strong>"));
        assert!(result.contains("<em>italic</em>"));
    }

    #[test]
    fn test_code_block() {
        let result = render_markdown("```rust\nfn main() {}\n```");
        assert!(result.contains("<code"));
        assert!(result.contains("fn main()"));
    }

    #[test]
    fn test_unordered_list() {
        let result = render_markdown("- item 1\n- item 2");
        assert!(result.contains("<ul>"));
        assert!(result.contains("<li>item 1</li>"));
    }

    #[test]
    fn test_strikethrough() {
        let result = render_markdown("~~deleted~~");
        assert!(result.contains("<del>deleted</del>"));
    }

    #[test]
    fn test_script_is_sanitized() {
        let result = render_markdown("hello <script>alert('x')</script>");
        assert!(!result.contains("<script"));
        assert!(result.contains("hello"));
    }

    #[test]
    fn test_event_handlers_are_stripped() {
        let result = render_markdown(r#"<img src="x" onerror="alert(1)">"#);
        assert!(!result.contains("onerror"));
    }

    #[test]
    fn test_links_survive_sanitization() {
        let result = render_markdown("[docs](https://example.com)");
        assert!(result.contains(r#"href="https://example.com""#));
        assert!(result.contains(">docs</a>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
