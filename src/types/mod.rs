mod decision;
mod event;
mod invocation;

pub use decision::{AnnounceDecision, Rejection, Response};
pub use event::{InboundEvent, PlatformEvent};
pub use invocation::{Invocation, SignedRequest};
