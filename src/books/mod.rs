//! Books and their editions.
//!
//! [`Book`] carries the shared title/author core; [`PaperBook`] and
//! [`AudioBook`] embed it and add a kind-restricted carrier field each
//! (integer pages, float minutes).

pub mod book;
pub mod editions;

pub use book::Book;
pub use editions::{AudioBook, PaperBook};
