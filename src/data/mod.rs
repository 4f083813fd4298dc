mod loader;

pub use loader::{
    CATEGORY_COLUMN, LoadedRecords, YEAR_COLUMN, load_records_from_path, load_records_from_reader,
};
