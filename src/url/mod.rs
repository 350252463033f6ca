//! URL handling for problem pages
//!
//! This module extracts and validates Baekjoon problem numbers and turns the
//! image sources found on problem pages into absolute URLs.

mod image;
mod problem;

pub use image::normalize_image_url;
pub use problem::{extract_problem_id, validate_problem_url, ProblemId};
