pub mod store;
pub mod slices;

pub use store::Store;
pub use slices::{
    ResourceSlice, COMPETITIONS, DIVISIONS, JUDGES, LICENSE_COURSES, NEWS, PROVINCES, PUBLIC_IMAGES,
};
