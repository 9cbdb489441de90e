pub mod list;
pub mod reset;
pub mod run;
