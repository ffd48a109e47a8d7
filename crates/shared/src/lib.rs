pub mod domain;
pub mod error;
pub mod fragment;
pub mod records;
