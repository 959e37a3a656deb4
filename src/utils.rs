pub mod accumulate_lengths;
pub mod shared_prefix;
pub mod split_lines;
pub mod string_builder;
