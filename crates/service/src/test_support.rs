#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::{mechanic, owner, service_record, service_type, vehicle};

/// Fresh migrated in-memory database per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub struct Seed {
    pub vehicle_id: i32,
    pub other_vehicle_id: i32,
    pub mechanic_id: i32,
    pub oil_change_id: i32,
    pub brakes_id: i32,
}

/// One owner with two vehicles, one mechanic and a few service records.
/// Only the first vehicle has any service history.
pub async fn seed_history(db: &DatabaseConnection) -> Result<Seed, anyhow::Error> {
    owner::find_or_create_placeholder(db, 1).await?;
    let v = vehicle::create(db, &vehicle::NewVehicle {
        owner_id: 1,
        license_plate: "KA-01-0001".into(),
        model: "Civic".into(),
        mileage: 30_000,
        vehicle_number: "V-001".into(),
    })
    .await?;
    let other = vehicle::create(db, &vehicle::NewVehicle {
        owner_id: 1,
        license_plate: "KA-01-0002".into(),
        model: "Corolla".into(),
        mileage: 5_000,
        vehicle_number: "V-002".into(),
    })
    .await?;
    let m = mechanic::create(db, "Asha", "555-0100", "brakes").await?;
    let oil = service_type::create(db, "Oil Change").await?;
    let brakes = service_type::create(db, "Brake Service").await?;

    for (st, cost, rating) in [(oil.id, 50.0, Some(4)), (oil.id, 70.0, Some(5)), (brakes.id, 200.5, None)] {
        service_record::create(db, &service_record::NewServiceRecord {
            vehicle_id: v.id,
            mechanic_id: m.id,
            service_type_id: st,
            description: "routine".into(),
            cost,
            rating,
        })
        .await?;
    }

    Ok(Seed { vehicle_id: v.id, other_vehicle_id: other.id, mechanic_id: m.id, oil_change_id: oil.id, brakes_id: brakes.id })
}
