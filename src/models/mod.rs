pub mod record;
pub mod query;
pub mod auth;
pub mod competition;
pub mod division;
pub mod news;
pub mod province;
pub mod judge;
pub mod license_course;
pub mod public_image;

pub use record::{decode_row, decode_rows, Record};
pub use query::{Filter, Order, Query};
pub use auth::{AuthEvent, Profile, Role, Session, User};
pub use competition::Competition;
pub use division::Division;
pub use news::NewsArticle;
pub use province::Province;
pub use judge::Judge;
pub use license_course::LicenseCourse;
pub use public_image::PublicImage;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_rows_in_backend_order() {
        let rows = vec![
            json!({"id": "2", "code": "JB", "name": "Jawa Barat"}),
            json!({"id": 1, "name": "Jakarta"}),
        ];
        let provinces: Vec<Province> = decode_rows(rows).unwrap();
        assert_eq!(provinces[0].name, "Jawa Barat");
        assert_eq!(provinces[1].id, "1");
        assert_eq!(provinces[1].code, None);
    }

    #[test]
    fn one_bad_row_invalidates_the_batch() {
        let rows = vec![json!({"id": "1", "name": "Jakarta"}), json!({"id": "2"})];
        let err = decode_rows::<Province>(rows).unwrap_err();
        assert!(matches!(err, crate::error::FetchError::InvalidRow { table: "provinces", .. }));
    }

    #[test]
    fn decodes_competition_dates_and_numeric_foreign_keys() {
        let row = json!({
            "id": 7,
            "name": "Kejurnas 2025",
            "province_id": 31,
            "start_date": "2025-08-15",
            "end_date": "2025-08-17",
            "created_at": "2025-01-02T03:04:05+00:00"
        });
        let competition: Competition = decode_row(row).unwrap();
        assert_eq!(competition.province_id.as_deref(), Some("31"));
        assert_eq!(competition.start_date, chrono::NaiveDate::from_ymd_opt(2025, 8, 15));
        assert!(competition.created_at.is_some());
    }

    #[test]
    fn unknown_roles_fall_back_to_member() {
        let profile: Profile = decode_row(json!({"id": "u1", "role": "coach"})).unwrap();
        assert_eq!(profile.role, Role::Member);
        let profile: Profile = decode_row(json!({"id": "u2", "role": "admin"})).unwrap();
        assert_eq!(profile.role, Role::Admin);
    }

    #[test]
    fn competition_upcoming_uses_end_date_when_present() {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        let running: Competition = decode_row(json!({
            "id": "1", "name": "A", "start_date": "2025-08-15", "end_date": "2025-08-17"
        }))
        .unwrap();
        let past: Competition = decode_row(json!({"id": "2", "name": "B", "start_date": "2025-08-01"})).unwrap();
        let undated: Competition = decode_row(json!({"id": "3", "name": "C"})).unwrap();
        assert!(running.is_upcoming(today));
        assert!(!past.is_upcoming(today));
        assert!(!undated.is_upcoming(today));
    }

    #[test]
    fn session_expiry_is_inclusive() {
        let session = Session {
            access_token: "t".into(),
            refresh_token: None,
            expires_at: Some(100),
            user: User { id: "u".into(), email: None },
        };
        assert!(!session.is_expired(99));
        assert!(session.is_expired(100));
    }

    #[test]
    fn public_image_builds_storage_url() {
        let image: PublicImage = decode_row(json!({
            "id": "9", "bucket": "gallery", "path": "kejurnas/podium.jpg"
        }))
        .unwrap();
        assert_eq!(
            image.public_url("https://demo.supabase.co").unwrap(),
            "https://demo.supabase.co/storage/v1/object/public/gallery/kejurnas/podium.jpg"
        );
    }
}
