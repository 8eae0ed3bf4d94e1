use super::*;

/// Tests a transition from an allowed status.
///
/// Expected: Ok(true) and the new status persisted
#[tokio::test]
async fn updates_status_from_allowed_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;

    let repo = BloodRequestRepository::new(db);
    let moved = repo
        .transition(request.id, &[RequestStatus::Pending], RequestStatus::Accepted)
        .await?;

    assert!(moved);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Accepted);

    Ok(())
}

/// Tests that a transition from a disallowed status leaves the row untouched.
///
/// Expected: Ok(false) and the status unchanged
#[tokio::test]
async fn refuses_transition_from_other_state() -> Result<(), DbErr> {
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

    let repo = BloodRequestRepository::new(db);
    let moved = repo
        .transition(
            request.id,
            &[RequestStatus::Pending, RequestStatus::Accepted],
            RequestStatus::Rejected,
        )
        .await?;

    assert!(!moved);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Completed);

    Ok(())
}

/// Tests a transition on a request that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodRequestRepository::new(db);
    let moved = repo
        .transition(77, &[RequestStatus::Pending], RequestStatus::Accepted)
        .await?;

    assert!(!moved);

    Ok(())
}
