use thiserror::Error;

/// Persisted state the request lifecycle depends on is missing or inconsistent.
///
/// Any transaction that raises one of these is rolled back before the error is returned.
#[derive(Error, Debug)]
pub enum IntegrityFault {
    /// No inventory row exists for the donated blood group.
    ///
    /// The inventory migration seeds all eight groups, so this only occurs if rows were
    /// removed out of band.
    #[error("Inventory row for blood group {blood_group} is missing")]
    MissingInventoryRow { blood_group: String },
}
