//! # Action/reducer contract
//!
//! Every store slice is a plain struct implementing [`Reducer`]: it owns its state and
//! knows how to apply its own action enum. Pages and async actions never touch a slice
//! directly; they go through [`Dispatch`], which is implemented by whatever container
//! holds the slice. In the browser that is a signal-backed handle in the `ui` crate;
//! in tests it is [`LocalStore`].

/// A state slice that can apply its own actions.
pub trait Reducer {
    type Action;

    fn reduce(&mut self, action: Self::Action);
}

/// A container that holds a slice and serialises updates to it.
pub trait Dispatch<S: Reducer> {
    fn dispatch(&mut self, action: S::Action);

    /// Read from the current state.
    fn select<R>(&self, f: impl FnOnce(&S) -> R) -> R;
}

/// Plain owned container, used by tests and anywhere no reactive runtime exists.
#[derive(Clone, Debug, Default)]
pub struct LocalStore<S> {
    state: S,
}

impl<S> LocalStore<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<S: Reducer> Dispatch<S> for LocalStore<S> {
    fn dispatch(&mut self, action: S::Action) {
        self.state.reduce(action);
    }

    fn select<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state)
    }
}
