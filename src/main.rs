//! To-Do UI Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod datetime;
mod dom;
mod error;
mod feedback;
mod form_body;
mod logging;
mod models;
mod orchestrator;
mod outcome;
mod store;
mod triggers;

use app::App;
use config::{ClientConfig, PageContext, PageKind};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return;
        }
    };

    let raw_config = dom::element_text(&document, "client-config");
    let (config, config_error) = match ClientConfig::parse(raw_config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };
    logging::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("ignoring malformed client config: {}", e);
    }

    let page_attr = document.body().and_then(|body| body.get_attribute("data-page"));
    let page = PageContext::new(
        PageKind::from_attr(page_attr.as_deref()),
        dom::meta_content(&document, "csrf-token"),
        dom::query_param("v"),
    );
    log::info!("starting on {:?} page", page.kind);

    mount_to_body(move || view! { <App config=config.clone() page=page.clone() /> });
}
