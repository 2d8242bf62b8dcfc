//! Integration tests for article selection

use name_strings::{article_with_rule, get_article_for_noun, Article, ArticleRule, EnglishArticles};

#[test]
fn test_articles_for_common_nouns() {
    let cases = vec![
        ("dog", " a "),
        ("apple", " an "),
        ("Egg", " an "),
        ("cats", " "),
        ("class", " a "),
        ("", " "),
    ];

    for (noun, expected) in cases {
        assert_eq!(
            get_article_for_noun(noun, " "),
            expected,
            "Wrong article for {:?}",
            noun
        );
    }
}

#[test]
fn test_padding_is_used_verbatim() {
    assert_eq!(get_article_for_noun("pod", ""), "a");
    assert_eq!(get_article_for_noun("ingress", "--"), "--an--");
    assert_eq!(get_article_for_noun("nodes", "--"), "--");
}

/// Treats a silent leading "h" as a vowel sound.
struct SilentH;

impl ArticleRule for SilentH {
    fn article_for(&self, noun: &str) -> Option<Article> {
        if noun.to_ascii_lowercase().starts_with("hour") {
            return Some(Article::An);
        }
        EnglishArticles.article_for(noun)
    }
}

#[test]
fn test_rule_can_be_swapped() {
    assert_eq!(article_with_rule(&SilentH, "hour", " "), " an ");
    assert_eq!(article_with_rule(&SilentH, "house", " "), " a ");
    assert_eq!(get_article_for_noun("hour", " "), " a ");
}

#[test]
fn test_article_display() {
    assert_eq!(Article::A.to_string(), "a");
    assert_eq!(Article::An.to_string(), "an");
    assert_eq!(serde_json::to_string(&Article::An).unwrap(), "\"an\"");
}
