pub mod generate_sequence;
