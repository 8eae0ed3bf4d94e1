use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row written earlier in the same operation could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Record {id} in table '{table}' vanished during the operation")]
    RecordVanished {
        /// Table the record was expected in
        table: &'static str,
        /// Primary key of the missing record
        id: i32,
    },
}
