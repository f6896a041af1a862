use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, owner};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub license_plate: String,
    pub model: String,
    pub mileage: i32,
    pub vehicle_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Owner }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Owner => Entity::belongs_to(owner::Entity).from(Column::OwnerId).to(owner::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Columns written when a vehicle is registered.
#[derive(Clone, Debug, PartialEq)]
pub struct NewVehicle {
    pub owner_id: i32,
    pub license_plate: String,
    pub model: String,
    pub mileage: i32,
    pub vehicle_number: String,
}

pub fn validate(input: &NewVehicle) -> Result<(), errors::ModelError> {
    if input.owner_id <= 0 { return Err(errors::ModelError::Validation("owner id must be positive".into())); }
    if input.mileage < 0 { return Err(errors::ModelError::Validation("mileage cannot be negative".into())); }
    if input.license_plate.trim().is_empty() { return Err(errors::ModelError::Validation("license plate required".into())); }
    if input.model.trim().is_empty() { return Err(errors::ModelError::Validation("model required".into())); }
    if input.vehicle_number.trim().is_empty() { return Err(errors::ModelError::Validation("vehicle number required".into())); }
    Ok(())
}

/// Insert a vehicle. The owner must already exist; see
/// [`owner::find_or_create_placeholder`].
pub async fn create<C: ConnectionTrait>(db: &C, input: &NewVehicle) -> Result<Model, errors::ModelError> {
    validate(input)?;
    let am = ActiveModel {
        owner_id: Set(input.owner_id),
        license_plate: Set(input.license_plate.trim().to_string()),
        model: Set(input.model.trim().to_string()),
        mileage: Set(input.mileage),
        vehicle_number: Set(input.vehicle_number.trim().to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
