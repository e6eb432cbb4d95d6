use axum::{Extension, Json};

use crate::{
    api::middleware::auth::CurrentUser,
    domain::{
        catalog::{self, CampusEvent, DailyMenu, TimetableSlot},
        UserRole,
    },
};

pub async fn campus_events() -> Json<Vec<CampusEvent>> {
    Json(catalog::campus_events())
}

pub async fn hostel_menu() -> Json<Vec<DailyMenu>> {
    Json(catalog::hostel_menu())
}

/// The weekly timetable for the active role.
pub async fn timetable(Extension(current): Extension<CurrentUser>) -> Json<Vec<TimetableSlot>> {
    let slots = match current.user.role {
        UserRole::Student => catalog::student_timetable(),
        UserRole::Faculty => catalog::faculty_timetable(),
    };
    Json(slots)
}
