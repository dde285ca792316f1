pub const DEFAULT_OUTPUT_DIR: &str = "./Barcodes";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";
pub const CSV_EXT: &str = "csv";
pub const GZ_EXT: &str = "gz";
