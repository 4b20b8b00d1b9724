//! Book edition integration tests.
//!
//! These tests verify that the editions share the base book's validation
//! and keep their deliberately narrow carrier kinds: integer pages, float
//! minutes.

use curio::{AudioBook, Book, DomainError, PaperBook, TypeSet, ValueKind, ValueRule};

#[test]
fn test_base_book_requires_both_fields() {
    let book = Book::new("1984", "George Orwell").unwrap();
    assert_eq!(book.title(), "1984");
    assert_eq!(book.author(), "George Orwell");

    assert_eq!(
        Book::new("", "George Orwell").unwrap_err(),
        DomainError::value("title", ValueRule::Empty)
    );
    assert_eq!(
        Book::new("1984", 42).unwrap_err(),
        DomainError::type_mismatch("author", TypeSet::Text, ValueKind::Int)
    );
}

#[test]
fn test_paper_book_pages_are_integers_only() {
    let book = PaperBook::new("1984", "George Orwell", 349).unwrap();
    assert_eq!(book.pages(), 349);

    // In range but the wrong kind: the kind mismatch wins.
    let err = PaperBook::new("1984", "George Orwell", 349.0).unwrap_err();
    assert_eq!(
        err,
        DomainError::type_mismatch("pages", TypeSet::Integer, ValueKind::Float)
    );

    let err = PaperBook::new("1984", "George Orwell", -349).unwrap_err();
    assert_eq!(
        err,
        DomainError::value("pages", ValueRule::NotPositive { got: -349.0 })
    );
}

#[test]
fn test_audio_book_duration_is_float_only() {
    let book = AudioBook::new("Dune", "Frank Herbert", 306.5).unwrap();
    assert_eq!(book.duration(), 306.5);

    let err = AudioBook::new("Dune", "Frank Herbert", 306).unwrap_err();
    assert_eq!(
        err,
        DomainError::type_mismatch("duration", TypeSet::Float, ValueKind::Int)
    );

    let err = AudioBook::new("Dune", "Frank Herbert", -1.5).unwrap_err();
    assert_eq!(
        err,
        DomainError::value("duration", ValueRule::NotPositive { got: -1.5 })
    );
}

#[test]
fn test_editions_reject_bad_base_fields_before_their_own() {
    // The embedded book is built first, so its failure surfaces even when
    // the carrier field is also bad.
    let err = PaperBook::new("", "George Orwell", -1).unwrap_err();
    assert_eq!(err.field(), "title");
}

#[test]
fn test_setters_enforce_the_constructor_rule() {
    let mut paper = PaperBook::new("1984", "George Orwell", 349).unwrap();
    paper.set_pages(352).unwrap();
    assert_eq!(paper.pages(), 352);
    assert!(paper.set_pages(352.0).is_err());
    assert!(paper.set_pages(0).is_err());
    assert_eq!(paper.pages(), 352);

    let mut audio = AudioBook::new("Dune", "Frank Herbert", 306.5).unwrap();
    audio.set_duration(290.25).unwrap();
    assert_eq!(audio.duration(), 290.25);
    assert!(audio.set_duration(290).is_err());
    assert_eq!(audio.duration(), 290.25);
}

#[test]
fn test_display_lines() {
    let book = Book::new("1984", "George Orwell").unwrap();
    let paper = PaperBook::new("1984", "George Orwell", 349).unwrap();
    let audio = AudioBook::new("Dune", "Frank Herbert", 306.5).unwrap();

    assert_eq!(book.to_string(), "Book \"1984\" by George Orwell");
    assert_eq!(
        paper.to_string(),
        "Paper book \"1984\" by George Orwell, 349 pages"
    );
    assert_eq!(
        audio.to_string(),
        "Audio book \"Dune\" by Frank Herbert, 306.5 minutes"
    );
}
