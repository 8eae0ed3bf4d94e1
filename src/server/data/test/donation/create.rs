use super::*;

/// Tests creating a scheduled donation for a request.
///
/// Expected: Ok with the request's blood group, hospital and location copied over
#[tokio::test]
async fn creates_scheduled_donation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor, request) = factory::helpers::create_request_with_dependencies(db).await?;

    let scheduled_at = Utc::now();
    let repo = DonationRepository::new(db);
    let donation = repo
        .create(CreateDonationParams {
            request_id: request.id,
            donor_id: donor.id,
            blood_group: request.blood_group,
            hospital_name: request.hospital_name.clone(),
            location: request.location.clone(),
            status: DonationStatus::Scheduled,
            donated_at: scheduled_at,
            units_donated: None,
        })
        .await?;

    assert_eq!(donation.request_id, request.id);
    assert_eq!(donation.donor_id, donor.id);
    assert_eq!(donation.blood_group, request.blood_group);
    assert_eq!(donation.hospital_name, request.hospital_name);
    assert_eq!(donation.location, request.location);
    assert_eq!(donation.status, DonationStatus::Scheduled);
    assert_eq!(donation.units_donated, None);

    let stored = repo.find_by_request(request.id).await?;
    assert_eq!(stored, vec![donation]);

    Ok(())
}
