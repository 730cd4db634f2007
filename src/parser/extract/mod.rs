//! Field scanners. Each one takes a fresh traversal of a [`Document`] and
//! yields one field or fails.
//!
//! [`Document`]: crate::parser::Document

pub mod cast;
pub mod directors;
pub mod genre;
pub mod known_for;
pub mod labeled;
pub mod name;
pub mod rating;
pub mod recommendations;
pub mod search;
pub mod title;
