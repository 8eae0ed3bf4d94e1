use super::*;

/// Tests cancelling a pending request.
///
/// Expected: Ok with status `Rejected`
#[tokio::test]
async fn cancels_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let cancelled = service.cancel_request(request.id).await.unwrap();

    assert_eq!(cancelled.status, RequestStatus::Rejected);

    Ok(())
}

/// Tests cancelling an accepted request.
///
/// Expected: Ok with status `Rejected` and the scheduled donation cancelled
#[tokio::test]
async fn cancels_accepted_request_and_its_donation() -> Result<(), DbErr> {
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
        .record_donor_response(request.id, donor.id, true)
        .await
        .unwrap();

    let cancelled = service.cancel_request(request.id).await.unwrap();

    assert_eq!(cancelled.status, RequestStatus::Rejected);
    let donations = DonationRepository::new(db).find_by_request(request.id).await?;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].status, DonationStatus::Cancelled);

    Ok(())
}

/// Tests that completed requests cannot be cancelled.
///
/// Expected: Err(InvalidState) and status unchanged
#[tokio::test]
async fn refuses_to_cancel_completed_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .status(RequestStatus::Completed)
        .build()
        .await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let result = service.cancel_request(request.id).await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));
    let stored = service.get_request(request.id).await.unwrap();
    assert_eq!(stored.status, RequestStatus::Completed);

    Ok(())
}

/// Tests cancelling a request that does not exist.
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

    assert!(matches!(
        service.cancel_request(5).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
