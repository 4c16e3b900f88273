// src/config/consts.rs
use std::time::Duration;

// Net config
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const SCRAPE_PATH: &str = "/scrape";
pub const REQUEST_TIMEOUT_SECS: u64 = 600; // server-side scraping is slow
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("katastar_scrape/", env!("CARGO_PKG_VERSION"));

// Env overrides
pub const ENV_API_BASE: &str = "KATASTAR_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "KATASTAR_TIMEOUT_SECS";

// Local files
pub const CONFIG_FILE: &str = "katastar.toml";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Results
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const DEFAULT_MANUAL_FILE: &str = "results.xlsx";
pub const DEFAULT_UPLOAD_FILE: &str = "uploaded_results.xlsx";
pub const DEFAULT_OUT_DIR: &str = "out";

// Messages
pub const MSG_FILL_ROW: &str = "Please fill at least one row with Region and Parcel.";
pub const MSG_EMPTY_FILE: &str = "The loaded file has no line with Region and Parcel.";
pub const MSG_SCRAPE_FAILED: &str = "Scrape failed.";

// UI
pub const TICK: Duration = Duration::from_millis(100);
