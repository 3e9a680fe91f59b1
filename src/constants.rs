// Saffir-Simpson lower bounds in knots; a speed below the first bound is category 0.
pub const CATEGORY_1_MIN_KNOTS: i32 = 64;
pub const CATEGORY_2_MIN_KNOTS: i32 = 83;
pub const CATEGORY_3_MIN_KNOTS: i32 = 96;
pub const CATEGORY_4_MIN_KNOTS: i32 = 113;
pub const CATEGORY_5_MIN_KNOTS: i32 = 137;

pub const MAX_CATEGORY: u8 = 5;

// Report layout
pub const YEAR_COLUMN_WIDTH: usize = 4;
pub const MONTH_COLUMN_WIDTH: usize = 5;
pub const NAME_COLUMN_WIDTH: usize = 15;
pub const CATEGORY_COLUMN_WIDTH: usize = 5;
pub const KNOTS_COLUMN_WIDTH: usize = 5;
pub const PRESSURE_COLUMN_WIDTH: usize = 5;
pub const EMPTY_RESULT_MESSAGE: &str = "Void of hurricane data.";

// Menu
pub const MENU_OPTION_QUIT: u32 = 11;

// Defaults
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "hurricanedata.txt";
pub const DEFAULT_VERBOSITY: &str = "normal";
pub const VALID_VERBOSITY_LEVELS: &[&str] = &["silent", "normal", "verbose"];
