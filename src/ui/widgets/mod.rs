pub mod catalog_tree;
