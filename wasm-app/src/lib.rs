//! Browser adapter for the classlens dashboard.
//!
//! Everything with a contract lives in the `classlens` core; this
//! crate is the thin layer that can only be tested in a browser:
//! element lookups, event wiring, the `fetch` transport and the
//! two-frame bar animation. It applies the core's `UiEffect`
//! descriptions to the page and nothing else.

mod dom;
mod net;

use std::cell::RefCell;
use std::rc::Rc;

use classlens::UploadController;
use dom::Ui;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File};

type Controller = Rc<RefCell<UploadController<File>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let ui = Rc::new(Ui::attach(&document)?);
    let controller: Controller = Rc::new(RefCell::new(UploadController::new()));

    wire_file_input(&ui, &controller)?;
    wire_clear_button(&ui, &controller)?;
    wire_drop_zone(&ui, &controller)?;
    wire_submit(&ui, &controller)?;

    Ok(())
}

fn wire_file_input(ui: &Rc<Ui>, controller: &Controller) -> Result<(), JsValue> {
    let ui_inner = Rc::clone(ui);
    let controller = Rc::clone(controller);
    let input = ui.file_input.clone();

    let on_change = Closure::<dyn FnMut(Event)>::new(move |_| {
        if let Some(file) = input.files().and_then(|list| list.get(0)) {
            let effects = controller.borrow_mut().select_file(&file.name(), file);
            ui_inner.apply(effects);
        }
    });

    ui.file_input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn wire_clear_button(ui: &Rc<Ui>, controller: &Controller) -> Result<(), JsValue> {
    let ui_inner = Rc::clone(ui);
    let controller = Rc::clone(controller);

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_| {
        let effects = controller.borrow_mut().clear_file();
        ui_inner.apply(effects);
    });

    ui.clear_btn
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn wire_drop_zone(ui: &Rc<Ui>, controller: &Controller) -> Result<(), JsValue> {
    let zone = ui.drop_zone.clone();
    let on_dragover = Closure::<dyn FnMut(DragEvent)>::new(move |e: DragEvent| {
        e.prevent_default();
        let _ = zone.class_list().add_1("drag-over");
    });
    ui.drop_zone
        .add_event_listener_with_callback("dragover", on_dragover.as_ref().unchecked_ref())?;
    on_dragover.forget();

    let zone = ui.drop_zone.clone();
    let on_dragleave = Closure::<dyn FnMut(DragEvent)>::new(move |_| {
        let _ = zone.class_list().remove_1("drag-over");
    });
    ui.drop_zone
        .add_event_listener_with_callback("dragleave", on_dragleave.as_ref().unchecked_ref())?;
    on_dragleave.forget();

    let ui_inner = Rc::clone(ui);
    let controller = Rc::clone(controller);
    let on_drop = Closure::<dyn FnMut(DragEvent)>::new(move |e: DragEvent| {
        e.prevent_default();
        let _ = ui_inner.drop_zone.class_list().remove_1("drag-over");
        let dropped = e.data_transfer().and_then(|dt| dt.files()).and_then(|list| list.get(0));
        if let Some(file) = dropped {
            let effects = controller.borrow_mut().select_file(&file.name(), file);
            ui_inner.apply(effects);
        }
    });
    ui.drop_zone
        .add_event_listener_with_callback("drop", on_drop.as_ref().unchecked_ref())?;
    on_drop.forget();

    Ok(())
}

fn wire_submit(ui: &Rc<Ui>, controller: &Controller) -> Result<(), JsValue> {
    let ui_inner = Rc::clone(ui);
    let controller_inner = Rc::clone(controller);

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        e.prevent_default();

        // Single-flight: begin_submit refuses while a request is out.
        let begun = {
            let mut ctl = controller_inner.borrow_mut();
            ctl.begin_submit().map(|(request, effects)| {
                let file = ctl.selected().map(|s| s.handle.clone());
                (request, effects, file)
            })
        };

        let Some((request, effects, Some(file))) = begun else {
            return;
        };
        ui_inner.apply(effects);

        let ui_task = Rc::clone(&ui_inner);
        let controller_task = Rc::clone(&controller_inner);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = net::submit(request, &file).await;
            let effects = controller_task.borrow_mut().finish_submit(outcome);
            ui_task.apply(effects);
        });
    });

    ui.form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}
