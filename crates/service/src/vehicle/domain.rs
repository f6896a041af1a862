use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation;

/// Raw `add_vehicle` form. Field names follow the form the shop staff submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleForm {
    pub owner_id: Option<String>,
    pub license: Option<String>,
    pub model: Option<String>,
    pub milage: Option<String>,
    pub v_no: Option<String>,
}

impl VehicleForm {
    pub fn parse(&self) -> Result<models::vehicle::NewVehicle, ServiceError> {
        let owner_id = validation::parse_id("owner_id", self.owner_id.as_deref())?;
        let license_plate = validation::required("license", self.license.as_deref())?.to_string();
        let model = validation::required("model", self.model.as_deref())?.to_string();
        let mileage = validation::parse_non_negative_int("milage", self.milage.as_deref())?;
        let vehicle_number = validation::required("v_no", self.v_no.as_deref())?.to_string();
        Ok(models::vehicle::NewVehicle { owner_id, license_plate, model, mileage, vehicle_number })
    }
}

/// Outcome of registering a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleCreated {
    pub vehicle: models::vehicle::Model,
    /// A placeholder owner was synthesized for `vehicle.owner_id`.
    pub owner_created: bool,
}

/// Escape LIKE wildcards with `!` and wrap in `%...%`. Case is left to `ILIKE`.
pub fn like_pattern(q: &str) -> String {
    let mut out = String::with_capacity(q.len() + 2);
    out.push('%');
    for c in q.chars() {
        if matches!(c, '%' | '_' | '!') {
            out.push('!');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// Unicode case-insensitive substring match on model or vehicle number.
pub fn matches_query(v: &models::vehicle::Model, q: &str) -> bool {
    let needle = q.to_lowercase();
    v.model.to_lowercase().contains(&needle) || v.vehicle_number.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("CiViC"), "%CiViC%");
        assert_eq!(like_pattern("50%_off!"), "%50!%!_off!!%");
    }

    #[test]
    fn matches_query_folds_non_ascii() {
        let v = models::vehicle::Model {
            id: 1,
            owner_id: 1,
            license_plate: "ZG-1".into(),
            model: "ŠKODA Octavia".into(),
            mileage: 0,
            vehicle_number: "ÄB-7".into(),
        };
        assert!(matches_query(&v, "škoda"));
        assert!(matches_query(&v, "ŠKODA"));
        assert!(matches_query(&v, "äb-"));
        assert!(!matches_query(&v, "skoda"));
    }

    #[test]
    fn form_requires_every_field() {
        let full = VehicleForm {
            owner_id: Some("3".into()),
            license: Some("KA-01".into()),
            model: Some("Civic".into()),
            milage: Some("1200".into()),
            v_no: Some("V-9".into()),
        };
        let parsed = full.parse().unwrap();
        assert_eq!(parsed.owner_id, 3);
        assert_eq!(parsed.mileage, 1200);

        let missing_model = VehicleForm { model: Some(" ".into()), ..full.clone() };
        assert!(matches!(missing_model.parse(), Err(ServiceError::Validation(m)) if m.contains("model")));
        let bad_owner = VehicleForm { owner_id: Some("x".into()), ..full };
        assert!(matches!(bad_owner.parse(), Err(ServiceError::Validation(m)) if m.contains("owner_id")));
    }
}
