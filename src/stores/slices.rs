// ============================================================================
// SLICES - Descriptores de los slices de entidad
// ============================================================================
// Un solo slice genérico parametrizado por { nombre, query, lectura, acción }.
// ============================================================================

use chrono::Duration;
use crate::config::CONFIG;
use crate::models::{
    Competition, Division, Judge, LicenseCourse, NewsArticle, Province, PublicImage, Query, Record,
};
use crate::state::{Action, AppState, ResourceAction, ResourceState};

pub struct ResourceSlice<T: Record> {
    pub name: &'static str,
    pub query: fn() -> Query,
    pub select: fn(&AppState) -> &ResourceState<T>,
    pub wrap: fn(ResourceAction<T>) -> Action,
    /// Ventana de frescura; `None` = solo se recarga si idle/failed
    pub freshness: fn() -> Option<Duration>,
}

impl<T: Record> Clone for ResourceSlice<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Record> Copy for ResourceSlice<T> {}

impl<T: Record> PartialEq for ResourceSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: Record> std::fmt::Debug for ResourceSlice<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceSlice").field("name", &self.name).finish()
    }
}

fn on_demand() -> Option<Duration> {
    None
}

fn province_freshness() -> Option<Duration> {
    CONFIG.province_freshness()
}

fn competitions(state: &AppState) -> &ResourceState<Competition> {
    &state.competitions
}

fn divisions(state: &AppState) -> &ResourceState<Division> {
    &state.divisions
}

fn news(state: &AppState) -> &ResourceState<NewsArticle> {
    &state.news
}

fn provinces(state: &AppState) -> &ResourceState<Province> {
    &state.provinces
}

fn judges(state: &AppState) -> &ResourceState<Judge> {
    &state.judges
}

fn license_courses(state: &AppState) -> &ResourceState<LicenseCourse> {
    &state.license_courses
}

fn public_images(state: &AppState) -> &ResourceState<PublicImage> {
    &state.public_images
}

pub const COMPETITIONS: ResourceSlice<Competition> = ResourceSlice {
    name: "competitions",
    query: Competition::query,
    select: competitions,
    wrap: Action::Competitions,
    freshness: on_demand,
};

pub const DIVISIONS: ResourceSlice<Division> = ResourceSlice {
    name: "divisions",
    query: Division::query,
    select: divisions,
    wrap: Action::Divisions,
    freshness: on_demand,
};

pub const NEWS: ResourceSlice<NewsArticle> = ResourceSlice {
    name: "news",
    query: NewsArticle::query,
    select: news,
    wrap: Action::News,
    freshness: on_demand,
};

pub const PROVINCES: ResourceSlice<Province> = ResourceSlice {
    name: "provinces",
    query: Province::query,
    select: provinces,
    wrap: Action::Provinces,
    freshness: province_freshness,
};

pub const JUDGES: ResourceSlice<Judge> = ResourceSlice {
    name: "judges",
    query: Judge::query,
    select: judges,
    wrap: Action::Judges,
    freshness: on_demand,
};

pub const LICENSE_COURSES: ResourceSlice<LicenseCourse> = ResourceSlice {
    name: "license_courses",
    query: LicenseCourse::query,
    select: license_courses,
    wrap: Action::LicenseCourses,
    freshness: on_demand,
};

pub const PUBLIC_IMAGES: ResourceSlice<PublicImage> = ResourceSlice {
    name: "public_images",
    query: PublicImage::query,
    select: public_images,
    wrap: Action::PublicImages,
    freshness: on_demand,
};
