pub mod auth;
pub mod comment;
pub mod email;
pub mod notification;
pub mod post;
pub mod report;
pub mod stats;
pub mod vote;
