pub mod counter;
pub mod run;
