use super::*;

/// Tests the target donor accepting a pending request.
///
/// Expected: Ok with status `Accepted` and one scheduled donation copying the request's
/// blood group, hospital and location
#[tokio::test]
async fn accept_schedules_donation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let updated = service
        .record_donor_response(request.id, donor.id, true)
        .await
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Accepted);
    let donations = DonationRepository::new(db).find_by_request(request.id).await?;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].status, DonationStatus::Scheduled);
    assert_eq!(donations[0].donor_id, donor.id);
    assert_eq!(donations[0].blood_group, request.blood_group);
    assert_eq!(donations[0].hospital_name, request.hospital_name);
    assert_eq!(donations[0].location, request.location);

    Ok(())
}

/// Tests the target donor declining a pending request.
///
/// Expected: Ok with status `Rejected` and no donation
#[tokio::test]
async fn decline_rejects_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let updated = service
        .record_donor_response(request.id, donor.id, false)
        .await
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Rejected);
    assert!(DonationRepository::new(db)
        .find_by_request(request.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests a response from a donor the request was not sent to.
///
/// Expected: Err(BadRequest) and the request still pending
#[tokio::test]
async fn rejects_response_from_other_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let (_other_user, other_donor) = factory::create_donor_with_user(db).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let result = service
        .record_donor_response(request.id, other_donor.id, true)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = service.get_request(request.id).await.unwrap();
    assert_eq!(stored.status, RequestStatus::Pending);

    Ok(())
}

/// Tests responding to a request that is no longer pending.
///
/// Expected: Err(InvalidState) and no donation created
#[tokio::test]
async fn rejects_second_response() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    service
        .record_donor_response(request.id, donor.id, false)
        .await
        .unwrap();
    let result = service
        .record_donor_response(request.id, donor.id, true)
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));
    let stored = service.get_request(request.id).await.unwrap();
    assert_eq!(stored.status, RequestStatus::Rejected);
    assert!(DonationRepository::new(db)
        .find_by_request(request.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests responding to a request that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let result = service.record_donor_response(99, 1, true).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
