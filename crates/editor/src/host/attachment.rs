use std::ops::{Deref, DerefMut};

use tracing::trace;

use super::SplitViewHost;

/// Keyboard attachment of a [`SplitViewHost`].
///
/// Acquiring the guard attaches the host; dropping it detaches. The host is
/// reachable through the guard while it lives.
pub struct Attachment<'a> {
	host: &'a mut SplitViewHost,
}

impl<'a> Attachment<'a> {
	pub(super) fn new(host: &'a mut SplitViewHost) -> Self {
		host.attached = true;
		trace!("host attached");
		Self { host }
	}
}

impl Deref for Attachment<'_> {
	type Target = SplitViewHost;

	fn deref(&self) -> &SplitViewHost {
		&*self.host
	}
}

impl DerefMut for Attachment<'_> {
	fn deref_mut(&mut self) -> &mut SplitViewHost {
		&mut *self.host
	}
}

impl Drop for Attachment<'_> {
	fn drop(&mut self) {
		self.host.attached = false;
		trace!("host detached");
	}
}
