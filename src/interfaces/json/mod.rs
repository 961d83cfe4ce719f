pub mod quiz_set_reader;
