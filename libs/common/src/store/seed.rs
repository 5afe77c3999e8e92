//! Demo data loaded into a fresh store

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use super::RecordStore;
use crate::error::StoreResult;
use crate::models::{
    Car, CarStatus, Report, ReportPriority, ReportStatus, ReportType, User, UserRole, UserStatus,
};

const ADMIN_AVATAR: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const JANE_AVATAR: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn user(
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    phone: &str,
    bio: &str,
    role: UserRole,
    status: UserStatus,
    last_active: DateTime<Utc>,
    join_date: DateTime<Utc>,
) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: password.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: Some(phone.to_string()),
        bio: Some(bio.to_string()),
        role,
        status,
        language: "en".to_string(),
        timezone: "UTC-5".to_string(),
        avatar: Some(ADMIN_AVATAR.to_string()),
        last_active,
        join_date,
    }
}

#[allow(clippy::too_many_arguments)]
fn car(
    make: &str,
    model: &str,
    year: i32,
    license_plate: &str,
    owner: &str,
    status: CarStatus,
    location: &str,
    (latitude, longitude): (&str, &str),
    image: &str,
) -> Car {
    Car {
        id: Uuid::new_v4(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        license_plate: license_plate.to_string(),
        owner: owner.to_string(),
        status,
        location: Some(location.to_string()),
        latitude: Some(latitude.to_string()),
        longitude: Some(longitude.to_string()),
        image: Some(image.to_string()),
        created_at: Utc::now(),
    }
}

/// Load the demo users, cars and reports
///
/// The admin account is `admin@example.com` / `admin123`.
pub async fn load_demo_data(store: &RecordStore) -> StoreResult<()> {
    let now = Utc::now();

    let admin = store
        .users
        .insert(user(
            "admin",
            "admin123",
            "John",
            "Admin",
            "+1 (555) 123-4567",
            "System administrator with 5+ years of experience in car fleet management.",
            UserRole::Admin,
            UserStatus::Active,
            now,
            now,
        ))
        .await?;

    let jane = store
        .users
        .insert(User {
            email: "jane.cooper@example.com".to_string(),
            avatar: Some(JANE_AVATAR.to_string()),
            ..user(
                "jane.cooper",
                "password123",
                "Jane",
                "Cooper",
                "+1 (555) 234-5678",
                "Regular user",
                UserRole::User,
                UserStatus::Active,
                now - Duration::hours(2),
                midnight(2024, 1, 15),
            )
        })
        .await?;

    let tom = store
        .users
        .insert(user(
            "tom.cook",
            "password123",
            "Tom",
            "Cook",
            "+1 (555) 345-6789",
            "Professional driver",
            UserRole::Driver,
            UserStatus::Inactive,
            now - Duration::days(3),
            midnight(2023, 12, 22),
        ))
        .await?;

    let camry = store
        .cars
        .insert(car(
            "Toyota",
            "Camry",
            2024,
            "ABC-123",
            "John Smith",
            CarStatus::Active,
            "New York, NY",
            ("40.7128", "-74.0060"),
            "https://images.unsplash.com/photo-1549924231-f129b911e442?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
        ))
        .await?;

    let civic = store
        .cars
        .insert(car(
            "Honda",
            "Civic",
            2023,
            "XYZ-456",
            "Sarah Johnson",
            CarStatus::Maintenance,
            "Los Angeles, CA",
            ("34.0522", "-118.2437"),
            "https://images.unsplash.com/photo-1606664515524-ed2f786a0bd6?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
        ))
        .await?;

    store
        .cars
        .insert(car(
            "Ford",
            "F-150",
            2023,
            "DEF-789",
            "Mike Wilson",
            CarStatus::Active,
            "Chicago, IL",
            ("41.8781", "-87.6298"),
            "https://images.unsplash.com/photo-1594736797933-d0ef6ba6373e?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
        ))
        .await?;

    let reports = [
        Report {
            id: Uuid::new_v4(),
            user_id: jane.id,
            car_id: Some(camry.id),
            report_type: ReportType::Accident,
            message: "Minor collision at intersection, no injuries reported. Vehicle needs inspection and minor repairs to front bumper.".to_string(),
            status: ReportStatus::Pending,
            priority: ReportPriority::High,
            created_at: midnight(2024, 1, 20),
            resolved_at: None,
        },
        Report {
            id: Uuid::new_v4(),
            user_id: tom.id,
            car_id: Some(civic.id),
            report_type: ReportType::Maintenance,
            message: "Regular maintenance due for vehicle. Oil change and brake inspection needed. Last service was 6 months ago.".to_string(),
            status: ReportStatus::Resolved,
            priority: ReportPriority::Medium,
            created_at: midnight(2024, 1, 18),
            resolved_at: Some(midnight(2024, 1, 19)),
        },
        Report {
            id: Uuid::new_v4(),
            user_id: jane.id,
            car_id: None,
            report_type: ReportType::Complaint,
            message: "Having issues with the mobile app. Unable to track vehicle location properly. App crashes frequently.".to_string(),
            status: ReportStatus::Reviewed,
            priority: ReportPriority::Medium,
            created_at: midnight(2024, 1, 15),
            resolved_at: None,
        },
    ];
    for report in reports {
        store.reports.insert(report).await;
    }

    info!(admin_id = %admin.id, "Loaded demo data");
    Ok(())
}
