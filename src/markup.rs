use scraper::Html;

/// Removes HTML tags from `text`, keeping text content and whitespace.
///
/// Entities are decoded by the parser, so `&amp;` comes back as `&`.
pub fn strip_tags(text: &str) -> String {
    if !text.contains('<') && !text.contains('&') {
        return text.to_string();
    }
    let fragment = Html::parse_fragment(text);
    fragment.root_element().text().collect()
}
