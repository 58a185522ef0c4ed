// ============================================================================
// SELECTORS - Lecturas puras derivadas del estado
// ============================================================================

use chrono::{DateTime, Duration, NaiveDate, Utc};
use crate::models::{Competition, NewsArticle, PublicImage, Record, Role};
use crate::state::app_state::AppState;
use crate::state::auth_state::AuthState;
use crate::state::resource::{ResourceState, Status};

/// ¿Hay que volver a pedir el slice?
/// - idle / failed: sí
/// - loading: no
/// - succeeded: solo si hay ventana de frescura y ya pasó
pub fn needs_refresh<T>(
    state: &ResourceState<T>,
    freshness: Option<Duration>,
    now: DateTime<Utc>,
) -> bool {
    match state.status {
        Status::Idle | Status::Failed => true,
        Status::Loading => false,
        Status::Succeeded => match (freshness, state.last_fetched) {
            (Some(window), Some(fetched_at)) => now.signed_duration_since(fetched_at) >= window,
            (Some(_), None) => true,
            (None, _) => false,
        },
    }
}

/// Opción de un `<select>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn province_options(state: &AppState) -> Vec<SelectOption> {
    state
        .provinces
        .items
        .iter()
        .map(|p| SelectOption { value: p.id.clone(), label: p.name.clone() })
        .collect()
}

pub fn division_options(state: &AppState) -> Vec<SelectOption> {
    state
        .divisions
        .items
        .iter()
        .map(|d| SelectOption { value: d.id.clone(), label: d.name.clone() })
        .collect()
}

pub fn find_by_id<'a, T: Record>(state: &'a ResourceState<T>, id: &str) -> Option<&'a T> {
    state.items.iter().find(|item| item.id() == id)
}

pub fn province_name<'a>(state: &'a AppState, province_id: &str) -> Option<&'a str> {
    find_by_id(&state.provinces, province_id).map(|p| p.name.as_str())
}

/// Noticias publicadas, en el orden del backend
pub fn published_news(state: &AppState) -> Vec<NewsArticle> {
    state.news.items.iter().filter(|n| n.published).cloned().collect()
}

/// Competiciones abiertas o futuras, la más próxima primero
pub fn upcoming_competitions(state: &AppState, today: NaiveDate) -> Vec<Competition> {
    let mut upcoming: Vec<Competition> = state
        .competitions
        .items
        .iter()
        .filter(|c| c.is_upcoming(today))
        .cloned()
        .collect();
    upcoming.sort_by_key(|c| c.start_date.or(c.end_date));
    upcoming
}

pub fn images_in_category(state: &AppState, category: &str) -> Vec<PublicImage> {
    state
        .public_images
        .items
        .iter()
        .filter(|i| i.category.as_deref() == Some(category))
        .cloned()
        .collect()
}

/// URL pública de una imagen del slice; `None` si no existe o la ruta no es válida
pub fn public_image_url(state: &AppState, id: &str, base_url: &str) -> Option<String> {
    let image = find_by_id(&state.public_images, id)?;
    match image.public_url(base_url) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("⚠️ URL de imagen {} inválida: {}", id, e);
            None
        }
    }
}

pub fn is_authenticated(auth: &AuthState) -> bool {
    auth.session.is_some() && auth.user.is_some()
}

pub fn is_admin(auth: &AuthState) -> bool {
    is_authenticated(auth) && matches!(auth.profile.as_ref().map(|p| p.role), Some(Role::Admin))
}

/// Admin y editor pueden gestionar contenido
pub fn can_edit(auth: &AuthState) -> bool {
    is_authenticated(auth)
        && matches!(
            auth.profile.as_ref().map(|p| p.role),
            Some(Role::Admin) | Some(Role::Editor)
        )
}
