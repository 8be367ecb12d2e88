pub mod kline;
pub mod response;
pub mod secid;

pub use kline::*;
pub use response::*;
pub use secid::*;
