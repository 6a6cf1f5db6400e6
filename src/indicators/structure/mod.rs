//! Market-structure building blocks: pivots, level clustering, relevance

pub mod clustering;
pub mod pivots;
pub mod relevance;
