//! The two editor commands, written against the host capability traits.

mod decode;
mod share;

pub use decode::decode_from_playground;
pub use share::share_to_playground;
