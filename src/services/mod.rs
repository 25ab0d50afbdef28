pub mod doc_tree;
pub mod title_format;
