// ============================================================================
// APP STATE - Estado compuesto de todos los slices
// ============================================================================
// Nombres fijos y disjuntos. Solo se modifica a través de `Action`.
// ============================================================================

use crate::models::{
    Competition, Division, Judge, LicenseCourse, NewsArticle, Province, PublicImage,
};
use crate::state::auth_state::{AuthAction, AuthState};
use crate::state::resource::{ResourceAction, ResourceState};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppState {
    pub competitions: ResourceState<Competition>,
    pub divisions: ResourceState<Division>,
    pub news: ResourceState<NewsArticle>,
    pub provinces: ResourceState<Province>,
    pub judges: ResourceState<Judge>,
    pub license_courses: ResourceState<LicenseCourse>,
    pub public_images: ResourceState<PublicImage>,
    pub auth: AuthState,
}

/// Todo lo que se puede despachar al store
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Competitions(ResourceAction<Competition>),
    Divisions(ResourceAction<Division>),
    News(ResourceAction<NewsArticle>),
    Provinces(ResourceAction<Province>),
    Judges(ResourceAction<Judge>),
    LicenseCourses(ResourceAction<LicenseCourse>),
    PublicImages(ResourceAction<PublicImage>),
    Auth(AuthAction),
}

impl Action {
    /// Nombre del slice afectado (para logs)
    pub fn slice_name(&self) -> &'static str {
        match self {
            Action::Competitions(_) => "competitions",
            Action::Divisions(_) => "divisions",
            Action::News(_) => "news",
            Action::Provinces(_) => "provinces",
            Action::Judges(_) => "judges",
            Action::LicenseCourses(_) => "license_courses",
            Action::PublicImages(_) => "public_images",
            Action::Auth(_) => "auth",
        }
    }
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        let name = action.slice_name();
        match action {
            Action::Competitions(a) => self.competitions.reduce(name, a),
            Action::Divisions(a) => self.divisions.reduce(name, a),
            Action::News(a) => self.news.reduce(name, a),
            Action::Provinces(a) => self.provinces.reduce(name, a),
            Action::Judges(a) => self.judges.reduce(name, a),
            Action::LicenseCourses(a) => self.license_courses.reduce(name, a),
            Action::PublicImages(a) => self.public_images.reduce(name, a),
            Action::Auth(a) => self.auth.reduce(a),
        }
    }
}
