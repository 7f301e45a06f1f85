//! Book list query engine
//!
//! Stages run strictly in order, each on the survivors of the previous one:
//! title filter, author-name filter, year filter, sort, pagination.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::params::{BookQuery, SortDirection, SortField, SortSpec};
use crate::catalog::{Author, Book};

/// Stateless filter, sort and paginate over a book collection
pub struct BookQueryEngine;

impl BookQueryEngine {
    /// Runs every stage. Never fails and has no side effects.
    pub fn query(books: Vec<Book>, authors: &[Author], params: &BookQuery) -> Vec<Book> {
        let mut books = books;

        if let Some(title) = &params.title {
            books = Self::filter_title(books, title);
        }
        if let Some(author) = &params.author {
            books = Self::filter_author(books, authors, author);
        }
        if let Some(year) = params.year_filter() {
            books.retain(|b| b.year.is_some_and(|y| y as f64 == year));
        }
        if let Some(spec) = params.sort_spec() {
            Self::sort(&mut books, spec);
        }

        match params.pagination() {
            Some(page) => books
                .into_iter()
                .skip(page.offset())
                .take(page.limit)
                .collect(),
            None => books,
        }
    }

    fn filter_title(books: Vec<Book>, needle: &str) -> Vec<Book> {
        let needle = needle.to_lowercase();
        books
            .into_iter()
            .filter(|b| b.title.trim().to_lowercase().contains(&needle))
            .collect()
    }

    /// Matches against the whole author table, not just authors of the
    /// books that survived earlier stages.
    fn filter_author(books: Vec<Book>, authors: &[Author], needle: &str) -> Vec<Book> {
        let needle = needle.to_lowercase();
        let matching: HashSet<i64> = authors
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .map(|a| a.id)
            .collect();

        books
            .into_iter()
            .filter(|b| matching.contains(&b.author_id))
            .collect()
    }

    /// Stable sort. Books without a value for the field go last in either
    /// direction.
    fn sort(books: &mut [Book], spec: SortSpec) {
        books.sort_by(|a, b| {
            let ordering = match spec.field {
                SortField::Title => a.title.cmp(&b.title),
                SortField::Id => a.id.cmp(&b.id),
                SortField::AuthorId => a.author_id.cmp(&b.author_id),
                SortField::Year => match (a.year, b.year) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => return Ordering::Less,
                    (None, Some(_)) => return Ordering::Greater,
                    (None, None) => return Ordering::Equal,
                },
            };

            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}
