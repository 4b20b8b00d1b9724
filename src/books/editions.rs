//! Paper and audio editions.
//!
//! Each edition embeds a [`Book`] and adds one carrier field with a
//! deliberately narrow kind: page counts are integers only, running times
//! are floats only. Passing the other numeric kind is a type error even
//! when the number itself would be in range.

use serde::Serialize;

use crate::books::book::Book;
use crate::error::DomainError;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// A printed edition: a [`Book`] plus a page count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaperBook {
    book: Book,
    pages: i64,
}

impl PaperBook {
    /// Page count: a positive integer, floats rejected.
    pub const PAGES: FieldSpec = FieldSpec::integer("pages");

    /// Full field table, base fields included.
    pub const SCHEMA: Schema =
        Schema::new("PaperBook", &[Book::TITLE, Book::AUTHOR, Self::PAGES]);

    /// Create a printed edition.
    ///
    /// # Errors
    ///
    /// Everything [`Book::new`] raises, plus a kind mismatch for
    /// non-integer page counts and a rule violation for non-positive ones.
    pub fn new(
        title: impl Into<FieldValue>,
        author: impl Into<FieldValue>,
        pages: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            book: Book::new(title, author)?,
            pages: Self::PAGES.accept_int(pages)?,
        })
    }

    /// The embedded book.
    #[must_use]
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.book.title()
    }

    /// Author.
    #[must_use]
    pub fn author(&self) -> &str {
        self.book.author()
    }

    /// Page count.
    #[must_use]
    pub const fn pages(&self) -> i64 {
        self.pages
    }

    /// Replace the page count, under the same rule as the constructor.
    ///
    /// # Errors
    ///
    /// Rejects non-integer and non-positive page counts; the count is
    /// untouched on error.
    pub fn set_pages(&mut self, pages: impl Into<FieldValue>) -> Result<(), DomainError> {
        Self::PAGES.store_int(&mut self.pages, pages)
    }
}

impl std::fmt::Display for PaperBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Paper book \"{}\" by {}, {} pages",
            self.book.title(),
            self.book.author(),
            self.pages
        )
    }
}

/// An audio edition: a [`Book`] plus a running time in minutes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AudioBook {
    book: Book,
    duration: f64,
}

impl AudioBook {
    /// Running time in minutes: a positive float, integers rejected.
    pub const DURATION: FieldSpec = FieldSpec::float("duration");

    /// Full field table, base fields included.
    pub const SCHEMA: Schema =
        Schema::new("AudioBook", &[Book::TITLE, Book::AUTHOR, Self::DURATION]);

    /// Create an audio edition.
    ///
    /// # Errors
    ///
    /// Everything [`Book::new`] raises, plus a kind mismatch for
    /// non-float durations and a rule violation for non-positive ones.
    pub fn new(
        title: impl Into<FieldValue>,
        author: impl Into<FieldValue>,
        duration: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            book: Book::new(title, author)?,
            duration: Self::DURATION.accept_number(duration)?,
        })
    }

    /// The embedded book.
    #[must_use]
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.book.title()
    }

    /// Author.
    #[must_use]
    pub fn author(&self) -> &str {
        self.book.author()
    }

    /// Running time in minutes.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Replace the running time, under the same rule as the constructor.
    ///
    /// # Errors
    ///
    /// Rejects non-float and non-positive durations; the time is untouched
    /// on error.
    pub fn set_duration(&mut self, duration: impl Into<FieldValue>) -> Result<(), DomainError> {
        Self::DURATION.store_number(&mut self.duration, duration)
    }
}

impl std::fmt::Display for AudioBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Audio book \"{}\" by {}, {} minutes",
            self.book.title(),
            self.book.author(),
            self.duration
        )
    }
}
