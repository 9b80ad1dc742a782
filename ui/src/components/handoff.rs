//! Single-slot session handoff of the pending product id.
//!
//! The category view writes the slot immediately before navigating;
//! the product view consumes it exactly once at mount and never
//! re-reads it. Entering the product view without a prior write is the
//! missing-identifier terminal state, not an error here.

const SLOT_KEY: &str = "glimmer.productId";

#[cfg(target_family = "wasm")]
pub fn stash(product_id: &str) {
    let Some(storage) = session_storage() else {
        tracing::error!("sessionStorage unavailable; product handoff dropped");
        return;
    };
    if storage.set_item(SLOT_KEY, product_id).is_err() {
        tracing::error!("failed to write product handoff slot");
    }
}

/// Read and clear the slot.
#[cfg(target_family = "wasm")]
pub fn take() -> Option<String> {
    let storage = session_storage()?;
    let id = storage.get_item(SLOT_KEY).ok().flatten()?;
    let _ = storage.remove_item(SLOT_KEY);
    Some(id)
}

#[cfg(target_family = "wasm")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

// Native builds get a thread-local slot with the same write-then-take
// semantics, so the crate type-checks and the handoff stays testable.
#[cfg(not(target_family = "wasm"))]
mod native {
    use std::cell::RefCell;

    thread_local! {
        static SLOT: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub fn stash(product_id: &str) {
        SLOT.with(|slot| *slot.borrow_mut() = Some(product_id.to_string()));
    }

    pub fn take() -> Option<String> {
        SLOT.with(|slot| slot.borrow_mut().take())
    }
}

#[cfg(not(target_family = "wasm"))]
pub use native::{stash, take};
