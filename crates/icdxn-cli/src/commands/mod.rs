pub mod dispatch;
pub mod export;
pub mod import;
pub mod schema;
pub mod seed;
pub mod serve;
pub mod status;
