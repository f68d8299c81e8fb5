pub mod apartment_reader;
