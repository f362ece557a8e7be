//! Message composition and the Graph `sendMail` action.

mod address;
mod attachment;
mod message;
mod payload;
mod send;

pub use address::Address;
pub use attachment::FileAttachment;
pub use message::{BodyType, Message};
