//! Same-page anchor resolution.

/// Element id targeted by a same-page link, if the link should be
/// intercepted.
///
/// Only `#<id>` hrefs with a non-empty id qualify. A bare `#` or an
/// off-page href is left to the browser.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_named_fragments() {
        assert_eq!(fragment_target("#faq"), Some("faq"));
        assert_eq!(fragment_target("#cta"), Some("cta"));
    }

    #[test]
    fn bare_hash_is_left_alone() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn external_links_are_left_alone() {
        assert_eq!(fragment_target("https://petal.shop/#faq"), None);
        assert_eq!(fragment_target("/terms"), None);
    }
}
