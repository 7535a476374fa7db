pub mod classifying;
pub mod command_line;
pub mod convenience;
pub mod deciding;
pub mod formatting;
pub mod parsing;
pub mod syntax_tree;
