//! Output formatting functions.
//!
//! `--format json` goes through [`json`], everything else through [`pretty`].

pub mod json;
pub mod pretty;
