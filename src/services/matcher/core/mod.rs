pub mod edit_distance;
pub mod name_parser;
pub mod normalizer;
