pub mod ranker;
pub mod second_chance;
