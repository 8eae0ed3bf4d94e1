pub use super::blood_request::Entity as BloodRequest;
pub use super::donation::Entity as Donation;
pub use super::donor::Entity as Donor;
pub use super::inventory::Entity as Inventory;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
