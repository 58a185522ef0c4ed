/// URL del proyecto Supabase
/// Configurada en tiempo de compilación (via .env / build.rs):
/// - Desarrollo: http://localhost:54321 (supabase start)
/// - Producción: SUPABASE_URL env var
pub const SUPABASE_URL: &str = match option_env!("SUPABASE_URL") {
    Some(url) => url,
    None => "http://localhost:54321",
};

/// Clave pública (anon) del proyecto
pub const SUPABASE_ANON_KEY: &str = match option_env!("SUPABASE_ANON_KEY") {
    Some(key) => key,
    None => "",
};

/// Clave de localStorage donde se persiste la sesión de auth
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "association_portal_auth_session";
