use super::*;

/// Tests appending a notification linked to a request.
///
/// Expected: Ok with an unread notification readable through `get_by_user`
#[tokio::test]
async fn appends_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .append(AppendNotificationParams {
            user_id: user.id,
            kind: "emergency_request".to_string(),
            title: "Emergency".to_string(),
            message: "Blood needed".to_string(),
            request_id: Some(request.id),
        })
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.request_id, Some(request.id));
    assert_eq!(notification.kind, "emergency_request");
    assert!(!notification.read);

    let stored = repo.get_by_user(user.id).await?;
    assert_eq!(stored, vec![notification]);

    Ok(())
}

/// Tests that notifications without a request reference are accepted.
///
/// Expected: Ok with `request_id` None, and other users see nothing
#[tokio::test]
async fn appends_without_request_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.append(AppendNotificationParams {
        user_id: user.id,
        kind: "system".to_string(),
        title: "Welcome".to_string(),
        message: "Thanks for registering".to_string(),
        request_id: None,
    })
    .await?;

    let stored = repo.get_by_user(user.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].request_id, None);
    assert!(repo.get_by_user(other.id).await?.is_empty());

    Ok(())
}
