pub mod use_store;
pub mod use_resource;
pub mod use_auth;

pub use use_store::{use_store, use_store_context, StoreContext, UseStoreHandle};
pub use use_resource::{
    use_competitions, use_divisions, use_judges, use_license_courses, use_news,
    use_provinces, use_public_images, use_resource, should_fetch, UseResourceHandle,
};
pub use use_auth::{use_auth_listener, use_auth_state, UseAuthHandle};
