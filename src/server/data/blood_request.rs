use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::blood_request::{BloodRequest, CreateBloodRequestParams};

pub struct BloodRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BloodRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new request in the `Pending` state with its OTP attached
    ///
    /// # Arguments
    /// - `params`: Request fields, urgency and the issued OTP
    ///
    /// # Returns
    /// - `Ok(BloodRequest)`: The created request
    /// - `Err(DbErr)`: Database error, including a foreign key violation for an unknown donor
    pub async fn create(&self, params: CreateBloodRequestParams) -> Result<BloodRequest, DbErr> {
        let entity = entity::blood_request::ActiveModel {
            patient_name: ActiveValue::Set(params.patient_name),
            blood_group: ActiveValue::Set(params.blood_group),
            donor_id: ActiveValue::Set(params.donor_id),
            hospital_name: ActiveValue::Set(params.hospital_name),
            location: ActiveValue::Set(params.location),
            contact_number: ActiveValue::Set(params.contact_number),
            created_at: ActiveValue::Set(params.created_at),
            status: ActiveValue::Set(RequestStatus::Pending),
            urgency: ActiveValue::Set(params.urgency),
            otp_code: ActiveValue::Set(Some(params.otp.code)),
            otp_expires_at: ActiveValue::Set(Some(params.otp.expires_at)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BloodRequest::from_entity(entity))
    }

    /// Finds a request by ID
    ///
    /// # Returns
    /// - `Ok(Some(BloodRequest))`: The request if found
    /// - `Ok(None)`: No request with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BloodRequest>, DbErr> {
        let entity = entity::prelude::BloodRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BloodRequest::from_entity))
    }

    /// Moves a request to `to` only if its current status is one of `from`
    ///
    /// The status check and the write happen in a single `UPDATE ... WHERE` so two
    /// callers racing on the same request cannot both succeed.
    ///
    /// # Arguments
    /// - `id`: ID of the request
    /// - `from`: Statuses the transition is allowed from
    /// - `to`: Target status
    ///
    /// # Returns
    /// - `Ok(true)`: Request existed in an allowed status and was updated
    /// - `Ok(false)`: Request missing or in a status not listed in `from`
    /// - `Err(DbErr)`: Database error
    pub async fn transition(
        &self,
        id: i32,
        from: &[RequestStatus],
        to: RequestStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::BloodRequest::update_many()
            .set(entity::blood_request::ActiveModel {
                status: ActiveValue::Set(to),
                ..Default::default()
            })
            .filter(entity::blood_request::Column::Id.eq(id))
            .filter(entity::blood_request::Column::Status.is_in(from.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
