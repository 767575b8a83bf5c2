/// Characters removed from every raw token before it is counted.
///
/// Punctuation and digits; apostrophes and hyphens are deliberately absent,
/// so `LORD's` and `well-known` survive cleaning intact.
pub const STRIP_SET: &str = "!\"#$%&()*+,./:;<=>?@[\\]^_`{|}~0123456789";

pub trait TokenCleaner: Send + Sync {
    /// Clean one raw token, returning `None` if nothing is left of it.
    fn clean(&self, raw: &str) -> Option<String>;
}

/// Default cleaner: drops [`STRIP_SET`] characters, then removes every
/// hyphen from tokens that still begin with one. No case folding.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripSetCleaner;

impl TokenCleaner for StripSetCleaner {
    fn clean(&self, raw: &str) -> Option<String> {
        let mut cleaned: String = raw.chars().filter(|c| !STRIP_SET.contains(*c)).collect();
        // A token like `-test` is a hyphenation artifact; keep only its letters.
        if cleaned.starts_with('-') {
            cleaned.retain(|c| c != '-');
        }
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

/// Split `text` on whitespace and clean each token, discarding empties.
pub fn tokenize<'a>(
    text: &'a str,
    cleaner: &'a dyn TokenCleaner,
) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace().filter_map(|raw| cleaner.clean(raw))
}
