pub mod operation;
pub mod request;
pub mod response;

pub use operation::*;
pub use request::*;
pub use response::*;
