pub mod rush_hour;
pub mod scenario;
