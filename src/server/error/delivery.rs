use thiserror::Error;

/// Failure to deliver an outbound message over an external channel.
///
/// Never propagated to API callers; the notification dispatcher logs these and moves on.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The gateway could not be reached or the request failed in transit.
    #[error("SMS gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-success status code.
    #[error("SMS gateway rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
