//! Plain catalogued book.

use serde::Serialize;

use crate::error::DomainError;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// A book: title and author, both required.
///
/// The editions in [`crate::books::editions`] embed a `Book` and add their
/// own carrier field on top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    /// Title: non-empty text.
    pub const TITLE: FieldSpec = FieldSpec::text("title");
    /// Author: non-empty text.
    pub const AUTHOR: FieldSpec = FieldSpec::text("author");

    /// Full field table.
    pub const SCHEMA: Schema = Schema::new("Book", &[Self::TITLE, Self::AUTHOR]);

    /// Create a book.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch for non-text arguments and a rule violation
    /// for empty ones.
    pub fn new(
        title: impl Into<FieldValue>,
        author: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: Self::TITLE.accept_text(title)?,
            author: Self::AUTHOR.accept_text(author)?,
        })
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book \"{}\" by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueRule;

    #[test]
    fn test_new_valid() {
        let book = Book::new("1984", "George Orwell").unwrap();
        assert_eq!(book.title(), "1984");
        assert_eq!(book.author(), "George Orwell");
    }

    #[test]
    fn test_new_rejects_empty_and_non_text() {
        let err = Book::new("", "George Orwell").unwrap_err();
        assert_eq!(err, DomainError::value("title", ValueRule::Empty));

        let err = Book::new("1984", "").unwrap_err();
        assert_eq!(err, DomainError::value("author", ValueRule::Empty));

        let err = Book::new(1984, "George Orwell").unwrap_err();
        assert!(err.is_type());
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn test_display() {
        let book = Book::new("1984", "George Orwell").unwrap();
        assert_eq!(book.to_string(), "Book \"1984\" by George Orwell");
    }
}
