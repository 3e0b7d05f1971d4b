//! Spreadsheet I/O for course-assignment tables and post listings

mod cell;
mod reader;
mod table;
mod writer;

pub use cell::Cell;
pub use reader::{read_table, read_xlsx_table, read_csv_table};
pub use table::{ColumnError, Row, Table};
pub use writer::{OutputFormat, write_posts, write_vacant_table};
