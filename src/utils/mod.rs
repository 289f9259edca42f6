pub mod date_format;
