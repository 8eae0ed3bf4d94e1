use entity::sea_orm_active_enums::BloodGroup;
use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parses a blood group token such as `"O+"` or `"AB-"`
///
/// # Arguments
/// - `value` - The token to parse, matched exactly against the eight supported groups
///
/// # Returns
/// - `Ok(BloodGroup)` - Successfully parsed token
/// - `Err(AppError::BadRequest)` - Token is not one of `A+, A-, B+, B-, AB+, AB-, O+, O-`
pub fn parse_blood_group(value: &str) -> Result<BloodGroup, AppError> {
    BloodGroup::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Invalid blood group: '{}'", value)))
}

/// Ensures a required text field is not empty or whitespace
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Submitted value
///
/// # Returns
/// - `Ok(())` - Value contains at least one non-whitespace character
/// - `Err(AppError::BadRequest)` - Value is blank
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(())
}
