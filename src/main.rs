use association_portal::components::App;
use association_portal::config::CONFIG;

fn main() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Portal de la asociación ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
