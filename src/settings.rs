use balloon_core::WorldParams;
use web_sys as web;

pub fn current_query() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// `?log=debug` style override for the console logger; defaults to info.
pub fn log_level_from_query(query: &str) -> log::Level {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "log")
        .and_then(|(_, v)| v.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}

pub fn params_from_query(query: &str) -> WorldParams {
    let (params, errors) = WorldParams::default().with_query(query);
    for e in errors {
        log::warn!("[config] {e}; keeping default");
    }
    params
}
