// src/events.rs
//
// Explicit subscription registry for frame ticks and pointer input.
// Single-threaded: listeners run synchronously on the emitting thread.

use crate::interactions::PointerEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<A> = Rc<RefCell<dyn FnMut(&A)>>;

struct Registry<A> {
  next_id: u64,
  entries: Vec<(u64, Listener<A>)>,
}

impl<A> Registry<A> {
  fn contains(&self, id: u64) -> bool {
    self.entries.iter().any(|(i, _)| *i == id)
  }

  fn remove(&mut self, id: u64) -> bool {
    let before = self.entries.len();
    self.entries.retain(|(i, _)| *i != id);
    self.entries.len() != before
  }
}

/// One event channel. Cloning shares the same listener list.
pub struct Emitter<A: 'static> {
  registry: Rc<RefCell<Registry<A>>>,
}

impl<A: 'static> Clone for Emitter<A> {
  fn clone(&self) -> Self {
    Self {
      registry: self.registry.clone(),
    }
  }
}

impl<A: 'static> Default for Emitter<A> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: 'static> Emitter<A> {
  pub fn new() -> Self {
    Self {
      registry: Rc::new(RefCell::new(Registry {
        next_id: 0,
        entries: Vec::new(),
      })),
    }
  }

  /// Registers `listener`; it stays registered until the returned handle is
  /// unsubscribed (dropping the handle does not unsubscribe).
  pub fn subscribe(&self, listener: impl FnMut(&A) + 'static) -> Subscription {
    let mut reg = self.registry.borrow_mut();
    let id = reg.next_id;
    reg.next_id += 1;
    let listener: Listener<A> = Rc::new(RefCell::new(listener));
    reg.entries.push((id, listener));

    let weak: Weak<RefCell<Registry<A>>> = Rc::downgrade(&self.registry);
    Subscription {
      detach: Some(Box::new(move || {
        if let Some(reg) = weak.upgrade() {
          reg.borrow_mut().remove(id);
        }
      })),
    }
  }

  /// Calls every listener in registration order. Listeners may subscribe or
  /// unsubscribe while running; one removed mid-emission is not called.
  pub fn emit(&self, arg: &A) {
    let snapshot: Vec<(u64, Listener<A>)> = self
      .registry
      .borrow()
      .entries
      .iter()
      .map(|(id, l)| (*id, l.clone()))
      .collect();

    for (id, listener) in snapshot {
      if !self.registry.borrow().contains(id) {
        continue;
      }
      match listener.try_borrow_mut() {
        Ok(mut f) => (&mut *f)(arg),
        Err(_) => log::warn!("Skipping re-entrant listener {}", id),
      }
    }
  }

  pub fn listener_count(&self) -> usize {
    self.registry.borrow().entries.len()
  }
}

/// Handle returned by [`Emitter::subscribe`].
pub struct Subscription {
  detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
  /// Removes the listener. Safe to call more than once.
  pub fn unsubscribe(&mut self) {
    if let Some(detach) = self.detach.take() {
      detach();
    }
  }

  pub fn is_active(&self) -> bool {
    self.detach.is_some()
  }
}

/// Per-frame callback carrying elapsed seconds since the previous frame.
pub type TickSource = Emitter<f64>;

pub type PointerSource = Emitter<PointerEvent>;
