use crate::domain::model::Article;
use crate::domain::ports::ArticleRule;

/// English heuristics: plurals end in `s` but not `ss`, and nouns starting
/// with a vowel letter take "an".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishArticles;

impl EnglishArticles {
    pub fn is_plural(noun: &str) -> bool {
        noun.ends_with('s') && !noun.ends_with("ss")
    }

    pub fn is_vowel(c: char) -> bool {
        matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
    }
}

impl ArticleRule for EnglishArticles {
    fn article_for(&self, noun: &str) -> Option<Article> {
        let first = noun.chars().next()?;

        if Self::is_plural(noun) {
            return None;
        }

        if Self::is_vowel(first) {
            Some(Article::An)
        } else {
            Some(Article::A)
        }
    }
}

/// Returns the article for `noun` wrapped in `padding`, e.g. `" an "`.
///
/// Plurals and empty nouns take no article, in which case only `padding`
/// is returned.
pub fn get_article_for_noun(noun: &str, padding: &str) -> String {
    article_with_rule(&EnglishArticles, noun, padding)
}

/// Same as [`get_article_for_noun`] with a caller-provided rule.
pub fn article_with_rule<R: ArticleRule>(rule: &R, noun: &str, padding: &str) -> String {
    match rule.article_for(noun) {
        Some(article) => format!("{}{}{}", padding, article, padding),
        None => padding.to_string(),
    }
}
