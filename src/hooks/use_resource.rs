// ============================================================================
// USE RESOURCE HOOK - Lectura de un slice + fetch bajo demanda
// ============================================================================
// El fetch se lanza desde un efecto (nunca durante el render), como mucho
// una vez por montaje y nunca mientras el slice está en loading.
// ============================================================================

use std::rc::Rc;
use chrono::Utc;
use yew::prelude::*;
use crate::models::{
    Competition, Division, Judge, LicenseCourse, NewsArticle, Province, PublicImage, Record,
};
use crate::state::selectors::needs_refresh;
use crate::state::Status;
use crate::stores::{
    ResourceSlice, COMPETITIONS, DIVISIONS, JUDGES, LICENSE_COURSES, NEWS, PROVINCES, PUBLIC_IMAGES,
};
use super::use_store::use_store;

pub struct UseResourceHandle<T> {
    pub items: Rc<Vec<T>>,
    pub status: Status,
    pub error: Option<String>,
    pub loading: bool,
    /// Recarga manual (botón "reintentar")
    pub refetch: Callback<()>,
}

impl<T> Clone for UseResourceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            status: self.status,
            error: self.error.clone(),
            loading: self.loading,
            refetch: self.refetch.clone(),
        }
    }
}

/// Un montaje pide datos como mucho una vez y solo si el slice lo necesita
/// (`stale` ya es falso mientras hay una carga en curso)
pub fn should_fetch(stale: bool, already_requested: bool) -> bool {
    stale && !already_requested
}

#[hook]
pub fn use_resource<T: Record>(slice: ResourceSlice<T>) -> UseResourceHandle<T> {
    let handle = use_store();
    let resource = (slice.select)(&handle.state).clone();
    let stale = needs_refresh(&resource, (slice.freshness)(), Utc::now());
    let requested = use_mut_ref(|| false);

    {
        let context = handle.context.clone();
        let requested = requested.clone();
        use_effect_with(stale, move |stale| {
            let already_requested = *requested.borrow();
            if should_fetch(*stale, already_requested) {
                *requested.borrow_mut() = true;
                let vm = context.resources();
                wasm_bindgen_futures::spawn_local(async move {
                    // El error ya queda en el slice
                    let _ = vm.fetch_all(slice).await;
                });
            }
            || ()
        });
    }

    let refetch = {
        let context = handle.context.clone();
        Callback::from(move |_| {
            if (slice.select)(&context.store.get_state()).is_loading() {
                log::info!("⏳ [{}] ya hay una carga en curso", slice.name);
                return;
            }
            let vm = context.resources();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = vm.fetch_all(slice).await;
            });
        })
    };

    UseResourceHandle {
        loading: resource.is_loading(),
        items: resource.items,
        status: resource.status,
        error: resource.error,
        refetch,
    }
}

#[hook]
pub fn use_competitions() -> UseResourceHandle<Competition> {
    use_resource(COMPETITIONS)
}

#[hook]
pub fn use_divisions() -> UseResourceHandle<Division> {
    use_resource(DIVISIONS)
}

#[hook]
pub fn use_news() -> UseResourceHandle<NewsArticle> {
    use_resource(NEWS)
}

#[hook]
pub fn use_provinces() -> UseResourceHandle<Province> {
    use_resource(PROVINCES)
}

#[hook]
pub fn use_judges() -> UseResourceHandle<Judge> {
    use_resource(JUDGES)
}

#[hook]
pub fn use_license_courses() -> UseResourceHandle<LicenseCourse> {
    use_resource(LICENSE_COURSES)
}

#[hook]
pub fn use_public_images() -> UseResourceHandle<PublicImage> {
    use_resource(PUBLIC_IMAGES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use crate::state::ResourceState;

    fn stale(status: Status) -> bool {
        let state = ResourceState::<Province> {
            status,
            last_fetched: DateTime::from_timestamp(0, 0),
            ..ResourceState::default()
        };
        let now = DateTime::from_timestamp(60, 0).unwrap();
        needs_refresh(&state, Some(Duration::minutes(30)), now)
    }

    #[test]
    fn idle_slice_is_fetched_on_first_mount() {
        assert!(should_fetch(stale(Status::Idle), false));
    }

    #[test]
    fn loading_slice_is_never_fetched_again() {
        assert!(!should_fetch(stale(Status::Loading), false));
    }

    #[test]
    fn one_fetch_per_mount() {
        assert!(!should_fetch(stale(Status::Idle), true));
        assert!(!should_fetch(stale(Status::Failed), true));
    }

    #[test]
    fn failed_slice_is_retried_by_a_new_mount() {
        assert!(should_fetch(stale(Status::Failed), false));
    }

    #[test]
    fn fresh_slice_is_served_from_the_store() {
        assert!(!should_fetch(stale(Status::Succeeded), false));
    }
}
