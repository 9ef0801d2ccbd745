use crate::models::{Article, UpdateArticle};

/// In-memory article collection, insertion-ordered, alive for the process
/// lifetime only. Owned state rather than a package-level global so every test
/// can build an isolated instance.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// All articles in insertion order.
    pub fn list(&self) -> Vec<Article> {
        self.articles.clone()
    }

    /// First article whose id matches. Duplicate ids are legal; the earliest
    /// insertion wins.
    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Appends unconditionally — no id validation, no duplicate check.
    pub fn create(&mut self, article: Article) -> Article {
        self.articles.push(article.clone());
        article
    }

    /// Applies the supplied, non-empty fields of `changes` to every article
    /// matching `changes.id` and returns the first one touched. `None` when no
    /// article matches.
    pub fn update(&mut self, changes: &UpdateArticle) -> Option<Article> {
        let mut updated = None;

        for article in self
            .articles
            .iter_mut()
            .filter(|article| article.id == changes.id)
        {
            if let Some(title) = non_empty(&changes.title) {
                article.title = title.to_string();
            }
            if let Some(description) = non_empty(&changes.description) {
                article.description = description.to_string();
            }
            if let Some(content) = non_empty(&changes.content) {
                article.content = content.to_string();
            }

            if updated.is_none() {
                updated = Some(article.clone());
            }
        }

        updated
    }

    /// Removes the first article matching `id`. Returns whether anything was
    /// removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.articles.iter().position(|article| article.id == id) {
            Some(index) => {
                self.articles.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// An update field is applied only when supplied and non-empty; an empty string
/// counts as not supplied.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
