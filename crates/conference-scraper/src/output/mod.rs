//! Output writers: CSV tables for listings, JSON tables for schedules.
//!
//! File names carry the conference and year of the job that produced them.

mod json;
mod table;

pub use self::json::{results_file_name, write_schedule_results, write_schedule_results_to};
pub use table::{
    paper_data_file_name, papers_file_name, write_paper_data, write_paper_data_to, write_papers,
    write_papers_to,
};
