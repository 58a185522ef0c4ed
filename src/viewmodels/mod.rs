pub mod resource_viewmodel;
pub mod auth_viewmodel;

pub use resource_viewmodel::ResourceViewModel;
pub use auth_viewmodel::AuthViewModel;
