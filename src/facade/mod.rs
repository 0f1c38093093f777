//! Resource-grouped operations over the shared transport.
//!
//! Each group is a thin borrow of the pipeline: it assembles the verb,
//! path, query and body for one endpoint family and delegates verbatim.
//! No group classifies errors, retries, or decodes beyond unwrapping the
//! returned payload. Optional arguments that are not supplied are omitted
//! from the wire entirely.

pub mod channels;
pub mod chats;
pub mod contacts;
pub mod groups;
pub mod messages;
pub mod profile;
pub mod sessions;
pub mod status;

pub use channels::Channels;
pub use chats::Chats;
pub use contacts::{Contacts, ListContactsRequest};
pub use groups::Groups;
pub use messages::{Messages, Poll, SendSeenRequest, SendTextRequest, SendVideoRequest};
pub use profile::Profile;
pub use sessions::{CreateSessionRequest, QrFormat, Sessions};
pub use status::Status;
