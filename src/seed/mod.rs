use crate::models::{Article, NewProduct};

/// The two records every fresh process starts with. Restarting the service
/// resets the store to exactly this list.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "Hello".to_string(),
            description: "Article Description".to_string(),
            content: "Article Content".to_string(),
        },
        Article {
            id: "2".to_string(),
            title: "Hello 2".to_string(),
            description: "Article Description".to_string(),
            content: "Article Content".to_string(),
        },
    ]
}

/// One-shot demonstration row for the relational side of the service.
pub fn demo_product() -> NewProduct {
    NewProduct {
        name: "Book".to_string(),
        price_cents: 999,
        available: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_two_articles_in_order() {
        let articles = seed_articles();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "1");
        assert_eq!(articles[0].title, "Hello");
        assert_eq!(articles[1].id, "2");
        assert_eq!(articles[1].title, "Hello 2");
    }
}
