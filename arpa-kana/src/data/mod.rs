//! Fixed mapping table data.

pub mod kana;
