use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, mechanic, service_type, vehicle};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_id: i32,
    pub mechanic_id: i32,
    pub service_type_id: i32,
    pub serviced_at: DateTimeWithTimeZone,
    pub description: String,
    pub cost: f64,
    pub rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Vehicle, Mechanic, ServiceType }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Vehicle => Entity::belongs_to(vehicle::Entity).from(Column::VehicleId).to(vehicle::Column::Id).into(),
            Relation::Mechanic => Entity::belongs_to(mechanic::Entity).from(Column::MechanicId).to(mechanic::Column::Id).into(),
            Relation::ServiceType => Entity::belongs_to(service_type::Entity).from(Column::ServiceTypeId).to(service_type::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewServiceRecord {
    pub vehicle_id: i32,
    pub mechanic_id: i32,
    pub service_type_id: i32,
    pub description: String,
    pub cost: f64,
    pub rating: Option<i32>,
}

pub fn validate_rating(rating: Option<i32>) -> Result<(), errors::ModelError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(errors::ModelError::Validation("rating must be between 1 and 5".into())),
        _ => Ok(()),
    }
}

pub fn validate_cost(cost: f64) -> Result<(), errors::ModelError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(errors::ModelError::Validation("cost must be a non-negative number".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &NewServiceRecord) -> Result<Model, errors::ModelError> {
    validate_rating(input.rating)?;
    validate_cost(input.cost)?;
    let am = ActiveModel {
        vehicle_id: Set(input.vehicle_id),
        mechanic_id: Set(input.mechanic_id),
        service_type_id: Set(input.service_type_id),
        serviced_at: Set(Utc::now().into()),
        description: Set(input.description.trim().to_string()),
        cost: Set(input.cost),
        rating: Set(input.rating),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
