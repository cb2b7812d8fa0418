// src/ui/mod.rs
pub mod interactions;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};
use molspin::config::Config;
use molspin::events::{PointerSource, TickSource};
use molspin::model::Molecule;
use molspin::rendering::{CairoSurface, CanvasSize};
use molspin::MoleculeView;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedView = Rc<RefCell<MoleculeView<CairoSurface>>>;

pub fn run(molecule: Molecule, config: Config) -> glib::ExitCode {
    let app = Application::builder()
        .application_id("org.molspin.Molspin")
        .build();

    let molecule = Rc::new(molecule);
    let config = Rc::new(config);
    app.connect_activate(move |app| build_ui(app, &molecule, &config));

    // clap already consumed the command line
    app.run_with_args::<&str>(&[])
}

fn build_ui(app: &Application, molecule: &Molecule, config: &Config) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(format!("molspin - {} ({})", molecule.name, molecule.formula()))
        .default_width(config.window.width)
        .default_height(config.window.height)
        .build();

    let drawing_area = DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);
    window.set_child(Some(&drawing_area));

    // Real size arrives with the first resize
    let (canvas, surface) = match CanvasSize::new(config.window.width as f64, config.window.height as f64, 1.0)
        .and_then(|c| CairoSurface::new(c, config.view.background).map(|s| (c, s)))
    {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Cannot create drawing surface: {}", e);
            app.quit();
            return;
        }
    };

    let ticks = TickSource::new();
    let pointer = PointerSource::new();
    let mut view = match MoleculeView::new(&molecule.atoms, surface, canvas, &config.view, &ticks) {
        Ok(v) => v,
        Err(e) => {
            log::error!("Cannot show {}: {}", molecule.name, e);
            app.quit();
            return;
        }
    };
    view.listen_pointer(&pointer);
    let view: SharedView = Rc::new(RefCell::new(view));

    interactions::setup_interactions(
        &drawing_area,
        view.clone(),
        ticks,
        pointer,
        config.view.high_resolution,
    );

    let v = view.clone();
    window.connect_close_request(move |_| {
        v.borrow_mut().dispose();
        glib::Propagation::Proceed
    });

    window.present();
}
