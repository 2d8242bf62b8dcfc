use crate::domain::model::Article;

/// Decides which indefinite article, if any, precedes a noun.
///
/// `None` means the noun takes no article (plurals, empty input).
pub trait ArticleRule {
    fn article_for(&self, noun: &str) -> Option<Article>;
}

impl<R: ArticleRule + ?Sized> ArticleRule for &R {
    fn article_for(&self, noun: &str) -> Option<Article> {
        (**self).article_for(noun)
    }
}
