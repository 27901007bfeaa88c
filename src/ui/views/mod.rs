pub mod run;
pub mod watch;
