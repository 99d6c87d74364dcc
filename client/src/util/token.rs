//! Access-token persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a bearer token on login and every protected request
//! carries it in the `Authorization` header. The token is the only auth
//! state that survives a page reload, so it lives in browser `localStorage`
//! under [`TOKEN_KEY`] when running in the browser.
//!
//! DESIGN
//! ======
//! Off-browser builds (SSR and native tests) back the same API with a
//! thread-local cell: session logic and tests exercise identical set/get/
//! clear semantics without a DOM, and each test thread gets its own slot.

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static TOKEN_CELL: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Read the stored bearer token, if any.
#[must_use]
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKEN_CELL.with(|cell| cell.borrow().clone())
    }
}

/// Store the bearer token issued by a successful login.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKEN_CELL.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
    }
}

/// Drop the stored bearer token on logout or auth rejection.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKEN_CELL.with(|cell| *cell.borrow_mut() = None);
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;
