pub mod csv_catalog;

pub use csv_catalog::CsvMenuCatalog;
