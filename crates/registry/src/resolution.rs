use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use quill_language::{LanguageCapability, LanguageId};

use crate::error::Result;

/// Outcome of asking the registry for a language capability.
#[derive(Debug)]
pub enum Resolution {
	/// Eagerly built or already memoized.
	Ready(LanguageCapability),
	/// A load is required; await the [`PendingLoad`].
	Pending(PendingLoad),
}

impl Resolution {
	pub fn id(&self) -> LanguageId {
		match self {
			Self::Ready(cap) => cap.id(),
			Self::Pending(load) => load.id(),
		}
	}

	/// Waits for the capability regardless of strategy.
	pub async fn wait(self) -> Result<LanguageCapability> {
		match self {
			Self::Ready(cap) => Ok(cap),
			Self::Pending(load) => load.await,
		}
	}
}

/// An in-flight lazy load.
///
/// Owns everything it needs; awaiting it never borrows the registry. Dropping
/// it abandons the load without touching the cache.
pub struct PendingLoad {
	id: LanguageId,
	future: BoxFuture<'static, Result<LanguageCapability>>,
}

impl PendingLoad {
	pub(crate) fn new(id: LanguageId, future: BoxFuture<'static, Result<LanguageCapability>>) -> Self {
		Self { id, future }
	}

	pub fn id(&self) -> LanguageId {
		self.id
	}
}

impl Future for PendingLoad {
	type Output = Result<LanguageCapability>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		self.future.as_mut().poll(cx)
	}
}

impl fmt::Debug for PendingLoad {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PendingLoad").field("id", &self.id).finish_non_exhaustive()
	}
}
