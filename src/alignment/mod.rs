pub mod normalization;
pub mod positional;
pub mod report;
pub mod tokenization;
