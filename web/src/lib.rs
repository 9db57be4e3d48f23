use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Arguments are read from the URL hash, `&`-separated, e.g. `#--categories=4&-vv`.
    fn try_parse_hash(location_hash: &str) -> Result<Self, clap::Error> {
        let args = location_hash
            .trim_start_matches('#')
            .split('&')
            .filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once(BIN_NAME).chain(args))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let (args, parse_error) = match Args::try_parse_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([BIN_NAME]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring invalid arguments in {:?}: {}", location_hash, err);
    }

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
