use super::*;

/// Tests creating an emergency request.
///
/// Verifies the stored request is `Pending` and `Critical`, carries a 6-digit OTP that
/// expires exactly 30 minutes after creation, and that the donor's contact details are
/// returned.
///
/// Expected: Ok with pending request and donor contact
#[tokio::test]
async fn creates_pending_critical_request_with_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, donor) = factory::create_donor_with_user(db).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let created = service
        .create_emergency_request(emergency_params(donor.id, BloodGroup::OPositive))
        .await
        .unwrap();

    assert_eq!(created.donor.donor_id, donor.id);
    assert_eq!(created.donor.user_id, user.id);
    assert_eq!(created.donor.phone, user.phone);

    let stored = BloodRequestRepository::new(db)
        .find_by_id(created.request.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, RequestStatus::Pending);
    assert_eq!(stored.urgency, Urgency::Critical);
    assert_eq!(stored.blood_group, BloodGroup::OPositive);

    let otp = stored.otp.unwrap();
    assert_eq!(otp.code.len(), 6);
    assert!(otp.code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(otp.expires_at, stored.created_at + Duration::minutes(30));
    assert_eq!(created.otp_expires_at, otp.expires_at);

    Ok(())
}

/// Tests creating a request for a donor that does not exist.
///
/// Expected: Err(NotFound) and no request stored
#[tokio::test]
async fn fails_for_missing_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let result = service
        .create_emergency_request(emergency_params(404, BloodGroup::ANegative))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let requests = entity::prelude::BloodRequest::find().all(db).await?;
    assert!(requests.is_empty());

    Ok(())
}

/// Tests that a failing SMS gateway never prevents creation.
///
/// The persisted notification is still written once the background alert runs.
///
/// Expected: Ok with the request stored and the donor notified in-app
#[tokio::test]
async fn sms_failure_does_not_prevent_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, donor) = factory::create_donor_with_user(db).await?;
    let dispatcher = dispatcher_with(db, Arc::new(FailingSmsSender));
    let service = RequestLifecycleService::new(db, &dispatcher);

    let created = service
        .create_emergency_request(emergency_params(donor.id, BloodGroup::BPositive))
        .await;

    assert!(created.is_ok());
    let request_id = created.unwrap().request.id;

    // Alert delivery runs on a background task
    let notification_repo = NotificationRepository::new(db);
    let mut notifications = Vec::new();
    for _ in 0..50 {
        notifications = notification_repo.get_by_user(user.id).await?;
        if !notifications.is_empty() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].request_id, Some(request_id));

    Ok(())
}
