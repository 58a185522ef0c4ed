// ============================================================================
// PORTAL ASOCIACIÓN - CAPA DE ESTADO CLIENTE (YEW + WASM)
// ============================================================================
// - Models: registros tipados de cada tabla del backend
// - Services: SOLO comunicación con el backend (trait `Backend`)
// - State: slices, reducers y selectores puros
// - Stores: contenedor único + descriptores de slices
// - ViewModels: operaciones async (fetch, guardar, auth)
// - Hooks / Components: puente con Yew
// ============================================================================

pub mod error;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod utils;

pub use error::FetchError;
pub use state::{Action, AppState};
pub use stores::Store;
