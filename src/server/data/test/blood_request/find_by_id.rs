use super::*;

/// Tests finding an existing request.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _donor, created) = factory::helpers::create_request_with_dependencies(db).await?;

    let repo = BloodRequestRepository::new(db);
    let request = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(request.id, created.id);
    assert_eq!(request.blood_group, created.blood_group);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(
        request.otp.map(|otp| otp.code),
        created.otp_code.clone()
    );

    Ok(())
}

/// Tests that a request without OTP columns maps to no OTP.
///
/// Expected: Ok(Some) with `otp` set to None
#[tokio::test]
async fn maps_missing_otp_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let created = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .without_otp()
        .build()
        .await?;

    let repo = BloodRequestRepository::new(db);
    let request = repo.find_by_id(created.id).await?.unwrap();

    assert!(request.otp.is_none());

    Ok(())
}

/// Tests finding a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodRequestRepository::new(db);

    assert!(repo.find_by_id(12345).await?.is_none());

    Ok(())
}
