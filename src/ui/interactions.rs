// src/ui/interactions.rs

use super::SharedView;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, GestureDrag};
use molspin::events::{PointerSource, TickSource};
use molspin::interactions::PointerEvent;
use molspin::rendering::CanvasSize;
use nalgebra::Vector2;
use std::cell::Cell;

fn backing_scale(area: &DrawingArea, high_res: bool) -> f64 {
  if high_res {
    area.scale_factor().max(1) as f64
  } else {
    1.0
  }
}

// Widget coordinates -> surface pixels
fn to_pixels(area: &DrawingArea, high_res: bool, x: f64, y: f64) -> Vector2<f64> {
  Vector2::new(x, y) * backing_scale(area, high_res)
}

fn apply_cursor(area: &DrawingArea, view: &SharedView) {
  let change = view.borrow().with_surface_mut(|s| s.take_cursor_change());
  if let Some(style) = change {
    let cursor = style
      .names()
      .iter()
      .find_map(|name| gdk::Cursor::from_name(name, None));
    area.set_cursor(cursor.as_ref());
  }
}

pub fn setup_interactions(
  drawing_area: &DrawingArea,
  view: SharedView,
  ticks: TickSource,
  pointer: PointerSource,
  high_res: bool,
) {
  // 1. FRAME CLOCK -> TICKS
  let last_frame: Cell<Option<i64>> = Cell::new(None);
  let v = view.clone();
  drawing_area.add_tick_callback(move |area, clock| {
    let now = clock.frame_time(); // microseconds
    let dt = match last_frame.replace(Some(now)) {
      Some(prev) => (now - prev).max(0) as f64 / 1_000_000.0,
      None => 0.0,
    };
    ticks.emit(&dt);
    apply_cursor(area, &v);
    area.queue_draw();
    glib::ControlFlow::Continue
  });

  // 2. MOUSE DRAG -> POINTER EVENTS
  let drag = GestureDrag::new();

  let (p, v, da) = (pointer.clone(), view.clone(), drawing_area.clone());
  drag.connect_drag_begin(move |_, x, y| {
    p.emit(&PointerEvent::Down(to_pixels(&da, high_res, x, y)));
    apply_cursor(&da, &v);
  });

  let (p, da) = (pointer.clone(), drawing_area.clone());
  drag.connect_drag_update(move |gesture, dx, dy| {
    if let Some((x0, y0)) = gesture.start_point() {
      p.emit(&PointerEvent::Move(to_pixels(&da, high_res, x0 + dx, y0 + dy)));
    }
  });

  let (p, v, da) = (pointer.clone(), view.clone(), drawing_area.clone());
  drag.connect_drag_end(move |gesture, dx, dy| {
    let (x0, y0) = gesture.start_point().unwrap_or((0.0, 0.0));
    p.emit(&PointerEvent::Up(to_pixels(&da, high_res, x0 + dx, y0 + dy)));
    apply_cursor(&da, &v);
  });

  let (p, v, da) = (pointer, view.clone(), drawing_area.clone());
  drag.connect_cancel(move |gesture, _| {
    let (x, y) = gesture.start_point().unwrap_or((0.0, 0.0));
    p.emit(&PointerEvent::Cancel(to_pixels(&da, high_res, x, y)));
    apply_cursor(&da, &v);
  });
  drawing_area.add_controller(drag);

  // 3. RESIZE
  let v = view.clone();
  drawing_area.connect_resize(move |area, w, h| {
    match CanvasSize::new(w as f64, h as f64, backing_scale(area, high_res)) {
      Ok(canvas) => {
        if let Err(e) = v.borrow().resize(canvas) {
          log::warn!("Resize to {}x{} failed: {}", w, h, e);
        }
      }
      Err(e) => log::debug!("Ignoring resize: {}", e),
    }
  });

  // 4. PRESENT
  drawing_area.set_draw_func(move |_, cr, _, _| {
    if let Err(e) = view.borrow().with_surface_mut(|s| s.paint_onto(cr)) {
      log::warn!("Failed to present frame: {}", e);
    }
  });
}
