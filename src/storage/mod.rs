pub mod colour_table_file;
pub mod write_ppm;
