use crate::data::Report;
use crate::fetch::fetch_document;
use crate::viewer::{PendingFetch, ViewerAction, ViewerBody, ViewerStore};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

pub const CARD_HINT: &str = "Click to read case study...";

/// One catalog card. `index` is the key the viewer opens it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard<'a> {
    pub index: usize,
    pub report: &'a Report,
}

pub fn build_cards(reports: &[Report]) -> Vec<ReportCard<'_>> {
    reports
        .iter()
        .enumerate()
        .map(|(index, report)| ReportCard { index, report })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ReportsSectionProps {
    pub reports: &'static [Report],
}

#[function_component(ReportsSection)]
pub fn reports_section(props: &ReportsSectionProps) -> Html {
    let reports = props.reports;
    let viewer = use_reducer(move || ViewerStore::new(reports));

    {
        let dispatcher = viewer.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<PendingFetch>| {
                if let Some(PendingFetch { tag, file }) = pending.clone() {
                    spawn_local(async move {
                        let outcome = fetch_document(&file).await;
                        dispatcher.dispatch(ViewerAction::Resolved { tag, outcome });
                    });
                }
                || ()
            },
            viewer.state().pending().cloned(),
        );
    }

    use_effect_with_deps(
        move |locked: &bool| {
            set_body_overflow(body_overflow(*locked));
            || ()
        },
        viewer.state().scroll_locked(),
    );

    let on_open = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(ViewerAction::Open(index)))
    };

    let open_index = viewer.state().open_index();

    html! {
        <>
            <div id="reports-grid" class="reports-grid">
                { for build_cards(reports).into_iter().map(|card| render_card(card, open_index, &on_open)) }
            </div>
            { render_modal(&viewer) }
        </>
    }
}

/// `overflow` value for the page body; scrolling is off while a report is open.
pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        "auto"
    }
}

pub fn modal_style(open: bool) -> &'static str {
    if open {
        "display: flex;"
    } else {
        "display: none;"
    }
}

pub fn card_class(index: usize, open_index: Option<usize>) -> &'static str {
    if open_index == Some(index) {
        "report-card active"
    } else {
        "report-card"
    }
}

fn render_card(card: ReportCard<'_>, open_index: Option<usize>, on_open: &Callback<usize>) -> Html {
    let index = card.index;
    let on_click = {
        let on_open = on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    };

    html! {
        <div key={index} class={card_class(index, open_index)} onclick={on_click}>
            <span class="category">{ &card.report.category }</span>
            <h3>{ &card.report.title }</h3>
            <p>{ CARD_HINT }</p>
        </div>
    }
}

fn render_modal(viewer: &UseReducerHandle<ViewerStore>) -> Html {
    let state = viewer.state();
    let display = modal_style(state.is_open());

    let on_backdrop_click = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |event: MouseEvent| {
            let on_backdrop = match (event.target(), event.current_target()) {
                (Some(target), Some(current)) => target == current,
                _ => false,
            };
            dispatcher.dispatch(ViewerAction::OverlayClick { on_backdrop });
        })
    };

    let on_close = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ViewerAction::Close))
    };

    let body = match state.body() {
        ViewerBody::Empty => html! {},
        ViewerBody::Loading => html! { <p class="modal-placeholder">{ "Loading report…" }</p> },
        ViewerBody::Rendered(markup) => Html::from_html_unchecked(AttrValue::from(markup.clone())),
        ViewerBody::Failed(message) => html! { <p class="report-error">{ message }</p> },
    };

    html! {
        <div id="report-modal" class="modal" style={display} onclick={on_backdrop_click}>
            <div class="modal-content">
                <span class="close-modal" onclick={on_close}>{ "×" }</span>
                <h2 id="modal-title">{ state.title() }</h2>
                <div id="modal-body" class="markdown-body">{ body }</div>
            </div>
        </div>
    }
}

fn set_body_overflow(value: &str) {
    if let Some(window) = window() {
        if let Some(document) = window.document() {
            if let Some(body) = document.body() {
                let _ = body.style().set_property("overflow", value);
            }
        }
    }
}
