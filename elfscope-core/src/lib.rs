pub mod consts;
pub mod error;
pub mod header;
pub mod ident;
mod raw;
pub mod tables;

pub use error::DecodeError;
pub use header::{Header, Header32, Header64};
pub use ident::Ident;
