//! Message traits for dispatchable records.

use crate::kind::EntryKind;

/// A marker trait for records that can flow through a dispatcher.
///
/// Messages must be `Send + Sync + 'static` so a dispatcher holding handlers
/// for them can be moved between threads by its owner.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Dispatched records must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}

/// A message stamped with a wire tag.
///
/// The tag is the value the dispatcher routes on. It is expected to be one of
/// the [`EntryKind`] wire strings, but any string is accepted.
#[diagnostic::on_unimplemented(
    message = "`{Self}` carries no wire tag",
    label = "missing `Tagged` implementation",
    note = "Implement `Tagged::tag` to return the record's wire string."
)]
pub trait Tagged: Message {
    /// The raw wire tag of this record.
    fn tag(&self) -> &str;

    /// The taxonomy member named by [`tag`](Tagged::tag), if any.
    fn kind(&self) -> Option<EntryKind> {
        EntryKind::from_wire(self.tag())
    }
}

impl Tagged for String {
    fn tag(&self) -> &str {
        self
    }
}

impl Tagged for &'static str {
    fn tag(&self) -> &str {
        self
    }
}

impl<T: Tagged> Tagged for Box<T> {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}

impl<T: Tagged> Tagged for std::sync::Arc<T> {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}
