//! Rendering of records to stdout (text or JSON)

use anyhow::Result;
use articlectl_db::{Article, Author};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as pretty JSON, or the given text rendering.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    pub fn authors(&self, authors: &[Author]) -> Result<()> {
        self.emit(&authors, || render_list(authors, author_line, "no authors"))
    }

    pub fn author(&self, author: &Author) -> Result<()> {
        self.emit(author, || author_detail(author))
    }

    pub fn articles(&self, articles: &[Article]) -> Result<()> {
        self.emit(&articles, || render_list(articles, article_line, "no articles"))
    }

    pub fn article(&self, article: &Article) -> Result<()> {
        self.emit(article, || article_detail(article))
    }

    pub fn rows_affected(&self, action: &str, rows: u64) -> Result<()> {
        self.emit(
            &serde_json::json!({ "action": action, "rows_affected": rows }),
            || format!("{action}: {rows} row(s) affected"),
        )
    }
}

fn render_list<T>(items: &[T], line: fn(&T) -> String, empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

fn stamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string())
}

pub fn author_line(author: &Author) -> String {
    let deleted = if author.is_deleted() { " [deleted]" } else { "" };
    format!("{}  {}{}", author.id, author.full_name(), deleted)
}

pub fn article_line(article: &Article) -> String {
    let deleted = if article.is_deleted() { " [deleted]" } else { "" };
    format!("{}  {}{}", article.id, article.title, deleted)
}

pub fn author_detail(author: &Author) -> String {
    format!(
        "id:         {}\nfirstname:  {}\nlastname:   {}\ncreated_at: {}\nupdated_at: {}\ndeleted_at: {}",
        author.id,
        author.firstname,
        author.lastname,
        author.created_at.to_rfc3339(),
        stamp(author.updated_at),
        stamp(author.deleted_at),
    )
}

pub fn article_detail(article: &Article) -> String {
    format!(
        "id:         {}\ntitle:      {}\nbody:       {}\nauthor_id:  {}\ncreated_at: {}\nupdated_at: {}\ndeleted_at: {}",
        article.id,
        article.title,
        article.body,
        article
            .author_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
        article.created_at.to_rfc3339(),
        stamp(article.updated_at),
        stamp(article.deleted_at),
    )
}
