use std::ops::Deref;
use std::rc::Rc;

use payloads::{AuthService, ChannelStore, MessageStore, UserStore};

/// Everything the UI reads its data from.
pub trait Backend: AuthService + ChannelStore + MessageStore + UserStore {}

impl<T> Backend for T where T: AuthService + ChannelStore + MessageStore + UserStore
{}

/// Shared handle to the backend, handed to the root component as a property.
///
/// Two handles are equal when they point at the same backend, so passing
/// the handle down never triggers a re-render by itself.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn Backend>);

impl BackendHandle {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self(Rc::new(backend))
    }
}

impl Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendHandle").finish_non_exhaustive()
    }
}
