//! Element lookups and effect application.
//!
//! `Ui` holds one reference per element the dashboard touches, looked
//! up once at startup, and knows how to apply the core's `UiEffect`
//! and `RenderPass` descriptions to them. The "hidden" CSS class is
//! the single show/hide mechanism, matching the stylesheet.

use classlens::{RenderPass, UiEffect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub struct Ui {
    pub form: HtmlElement,
    pub file_input: HtmlInputElement,
    pub drop_zone: HtmlElement,
    pub clear_btn: HtmlElement,
    file_info: HtmlElement,
    file_name: HtmlElement,
    analyze_btn: HtmlButtonElement,
    btn_text: HtmlElement,
    btn_loader: HtmlElement,
    error_message: HtmlElement,
    results_section: HtmlElement,
    stat_total: HtmlElement,
    stat_avg: HtmlElement,
    stat_top_count: HtmlElement,
    stat_risk_count: HtmlElement,
    subject_bars: HtmlElement,
    top_performers: HtmlElement,
    at_risk: HtmlElement,
    table_body: HtmlElement,
    highlights: HtmlElement,
}

impl Ui {
    /// Look up every element the dashboard needs. Fails loudly at
    /// startup if the page skeleton is missing an id.
    pub fn attach(document: &Document) -> Result<Ui, JsValue> {
        let analyze_btn: HtmlButtonElement = by_id(document, "analyze-btn")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#analyze-btn is not a button"))?;
        let btn_text = child(&analyze_btn, ".btn-text")?;
        let btn_loader = child(&analyze_btn, ".btn-loader")?;
        let file_input: HtmlInputElement = by_id(document, "csv-file-input")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#csv-file-input is not an input"))?;

        Ok(Ui {
            form: by_id(document, "upload-form")?,
            file_input,
            drop_zone: by_id(document, "drop-zone")?,
            clear_btn: by_id(document, "clear-file-btn")?,
            file_info: by_id(document, "file-info")?,
            file_name: by_id(document, "file-name")?,
            analyze_btn,
            btn_text,
            btn_loader,
            error_message: by_id(document, "error-message")?,
            results_section: by_id(document, "results-section")?,
            stat_total: by_id(document, "stat-total")?,
            stat_avg: by_id(document, "stat-avg")?,
            stat_top_count: by_id(document, "stat-top-count")?,
            stat_risk_count: by_id(document, "stat-risk-count")?,
            subject_bars: by_id(document, "subject-bars")?,
            top_performers: by_id(document, "top-performers-list")?,
            at_risk: by_id(document, "at-risk-list")?,
            table_body: by_id(document, "all-students-body")?,
            highlights: by_id(document, "highlights")?,
        })
    }

    pub fn apply(&self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(&self, effect: UiEffect) {
        match effect {
            UiEffect::ShowFileInfo(name) => {
                self.file_name.set_text_content(Some(&name));
                show(&self.file_info);
                hide(&self.drop_zone);
            }
            UiEffect::ClearFileInfo => {
                self.file_input.set_value("");
                hide(&self.file_info);
                show(&self.drop_zone);
            }
            UiEffect::SetSubmitEnabled(enabled) => {
                self.analyze_btn.set_disabled(!enabled);
            }
            UiEffect::SetLoading(loading) => {
                if loading {
                    hide(&self.btn_text);
                    show(&self.btn_loader);
                } else {
                    show(&self.btn_text);
                    hide(&self.btn_loader);
                }
            }
            UiEffect::ShowError(message) => {
                self.error_message.set_text_content(Some(&message));
                show(&self.error_message);
            }
            UiEffect::HideError => hide(&self.error_message),
            UiEffect::HideResults => hide(&self.results_section),
            UiEffect::ShowResults(pass) => self.show_results(*pass),
        }
    }

    fn show_results(&self, pass: RenderPass) {
        self.stat_total.set_text_content(Some(&pass.stat_total));
        self.stat_avg.set_text_content(Some(&pass.stat_average));
        self.stat_top_count.set_text_content(Some(&pass.stat_top_count));
        self.stat_risk_count.set_text_content(Some(&pass.stat_risk_count));

        self.subject_bars.set_inner_html(&pass.subject_bars);
        self.top_performers.set_inner_html(&pass.top_performers);
        self.at_risk.set_inner_html(&pass.at_risk);
        self.table_body.set_inner_html(&pass.table_body);
        self.highlights.set_inner_html(&pass.highlights);

        show(&self.results_section);
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.results_section
            .scroll_into_view_with_scroll_into_view_options(&options);

        self.animate_bars(pass.bar_targets);
    }

    /// Two-frame width animation: the fills were injected at 0% width;
    /// the first frame lets the browser register that baseline, the
    /// second applies the targets so the CSS transition runs instead
    /// of jumping.
    fn animate_bars(&self, targets: Vec<f64>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let container = self.subject_bars.clone();
        let second = Closure::once_into_js(move || {
            let Ok(fills) = container.query_selector_all(".subject-bar-fill") else {
                return;
            };
            for (i, target) in targets.iter().enumerate() {
                let el = fills
                    .item(i as u32)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok());
                if let Some(el) = el {
                    let _ = el.style().set_property("width", &format!("{target}%"));
                }
            }
        });

        let inner_window = window.clone();
        let first = Closure::once_into_js(move || {
            let _ = inner_window
                .request_animation_frame(second.unchecked_ref::<js_sys::Function>());
        });
        let _ = window.request_animation_frame(first.unchecked_ref::<js_sys::Function>());
    }
}

fn by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

fn child(parent: &HtmlElement, selector: &str) -> Result<HtmlElement, JsValue> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {selector}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("{selector} is not an HTML element")))
}

fn show(el: &HtmlElement) {
    let _ = el.class_list().remove_1("hidden");
}

fn hide(el: &HtmlElement) {
    let _ = el.class_list().add_1("hidden");
}
