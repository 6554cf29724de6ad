pub mod config;
pub mod data;
pub mod dom;
pub mod fetch;
pub mod markdown;
pub mod rank;
pub mod reports;
pub mod results;
pub mod toggles;
pub mod viewer;

use config::SiteConfig;
use log::{info, warn, Level};
use reports::{ReportsSection, ReportsSectionProps};
use results::{ResultsTable, ResultsTableProps};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{window, Document};

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

fn mount(document: &Document, config: &SiteConfig) {
    match document.get_element_by_id(config.results_root_id) {
        Some(root) => {
            yew::Renderer::<ResultsTable>::with_root_and_props(
                root,
                ResultsTableProps {
                    results: data::ctf_results(),
                    config: config.clone(),
                },
            )
            .render();
        }
        None => warn!("No #{} element, skipping results table", config.results_root_id),
    }

    match document.get_element_by_id(config.reports_root_id) {
        Some(root) => {
            yew::Renderer::<ReportsSection>::with_root_and_props(
                root,
                ReportsSectionProps {
                    reports: data::reports(),
                },
            )
            .render();
        }
        None => warn!("No #{} element, skipping reports", config.reports_root_id),
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));

    let Some(document) = window().and_then(|window| window.document()) else {
        warn!("No document available, nothing to render");
        return;
    };

    let config = SiteConfig::default();
    mount(&document, &config);

    if let Err(err) = dom::bind_mobile_nav(&document, &config) {
        warn!("Mobile menu unavailable: {:?}", err);
    }
    if let Err(err) = dom::bind_gallery(&document, &config) {
        warn!("Gallery pagination unavailable: {:?}", err);
    }

    info!(
        "Portfolio ready: {} results, {} reports",
        data::ctf_results().len(),
        data::reports().len()
    );
}
