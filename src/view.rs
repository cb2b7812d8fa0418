// src/view.rs
//
// Owns a molecule's renderer state and keeps it animated from a tick source.

use crate::config::ViewConfig;
use crate::error::{SurfaceError, ViewError};
use crate::events::{PointerSource, Subscription, TickSource};
use crate::interactions::{PointerEvent, RotationController};
use crate::model::SourceAtom;
use crate::rendering::{CanvasSize, CursorStyle, DrawingSurface, ProjectedAtom, SceneBuilder};
use crate::state::ViewState;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// An interactive, auto-spinning view of one molecule.
///
/// Listeners hold only a weak reference to the state, so a subscription that
/// fires after the view is gone does nothing.
pub struct MoleculeView<S: DrawingSurface + 'static> {
  state: Rc<RefCell<ViewState<S>>>,
  subscriptions: Vec<Subscription>,
  disposed: bool,
}

impl<S: DrawingSurface + 'static> MoleculeView<S> {
  pub fn new(
    atoms: &[SourceAtom],
    mut surface: S,
    canvas: CanvasSize,
    config: &ViewConfig,
    ticks: &TickSource,
  ) -> Result<Self, ViewError> {
    let config = config.clone().sanitized();
    let mut builder = SceneBuilder::new(config.position_scale);
    let scene = builder.build(atoms)?;

    surface.resize(canvas)?;
    surface.set_cursor(CursorStyle::Grab);

    let controller = RotationController::new(config.spin_rate, config.drag_sensitivity);
    let state = Rc::new(RefCell::new(ViewState::new(
      scene,
      builder.into_gradients(),
      controller,
      canvas,
      config.view_margin,
      surface,
    )));
    state.borrow_mut().draw();

    let weak = Rc::downgrade(&state);
    let tick = ticks.subscribe(move |dt: &f64| {
      with_live(&weak, |s| s.advance(*dt));
    });

    log::info!("Molecule view ready: {} atoms", atoms.len());
    Ok(Self {
      state,
      subscriptions: vec![tick],
      disposed: false,
    })
  }

  /// Feeds pointer events from `source` into the rotation controller.
  pub fn listen_pointer(&mut self, source: &PointerSource) {
    if self.disposed {
      return;
    }
    let weak = Rc::downgrade(&self.state);
    let sub = source.subscribe(move |event: &PointerEvent| {
      with_live(&weak, |s| s.handle_pointer(event));
    });
    self.subscriptions.push(sub);
  }

  pub fn handle_pointer(&self, event: PointerEvent) {
    if !self.disposed {
      self.state.borrow_mut().handle_pointer(&event);
    }
  }

  pub fn resize(&self, canvas: CanvasSize) -> Result<(), SurfaceError> {
    if self.disposed {
      return Ok(());
    }
    self.state.borrow_mut().resize(canvas)
  }

  pub fn dispose(&mut self) {
    if self.disposed {
      return;
    }
    for sub in &mut self.subscriptions {
      sub.unsubscribe();
    }
    self.subscriptions.clear();
    self.disposed = true;
    log::debug!("Molecule view disposed");
  }

  pub fn is_disposed(&self) -> bool {
    self.disposed
  }

  pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<S>) -> R) -> R {
    f(&self.state.borrow())
  }

  pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
    f(&mut self.state.borrow_mut().surface)
  }

  pub fn atoms(&self) -> Vec<ProjectedAtom> {
    self.state.borrow().atoms.clone()
  }
}

impl<S: DrawingSurface + 'static> Drop for MoleculeView<S> {
  fn drop(&mut self) {
    self.dispose();
  }
}

fn with_live<S: DrawingSurface>(weak: &Weak<RefCell<ViewState<S>>>, f: impl FnOnce(&mut ViewState<S>)) {
  let Some(state) = weak.upgrade() else { return };
  match state.try_borrow_mut() {
    Ok(mut s) => f(&mut s),
    Err(_) => log::warn!("View state busy, dropping event"),
  };
}
