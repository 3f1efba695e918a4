pub mod term_vector;
