//! # Feedback Strategies Module
//!
//! This module provides pluggable feedback strategies for the grader.
//! Each strategy implements the [`Feedback`](crate::traits::feedback::Feedback) trait and produces
//! one [`FeedbackEntry`](crate::traits::feedback::FeedbackEntry) per graded answer.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: Template feedback derived from each answer's verdict.
//! - [`manual_feedback`]: Instructor-written messages per question, with automatic fallback.

pub mod auto_feedback;
pub mod manual_feedback;
