use vkit_contact::{FieldRole, FormEvent, MemoryForm};

mod helpers;

async fn error_of(
    controller: &vkit_contact::ContactFormController<MemoryForm>,
    role: FieldRole,
) -> Option<String> {
    controller
        .inspect(|form| form.error(role).map(str::to_owned))
        .await
        .flatten()
}

#[tokio::test]
async fn test_blur_shows_then_clears_error() -> anyhow::Result<()> {
    let controller = helpers::bind(MemoryForm::contact().with_value(FieldRole::Name, "R"));

    controller.blur(FieldRole::Name).await;
    assert_eq!(
        error_of(&controller, FieldRole::Name).await.as_deref(),
        Some("Please enter a valid name (at least 2 characters)")
    );
    assert_eq!(
        controller
            .inspect(|form| form.field(FieldRole::Name).map(|field| field.invalid))
            .await
            .flatten(),
        Some(true)
    );

    controller
        .update(|form| form.set_value(FieldRole::Name, "Ravi"))
        .await;
    controller.blur(FieldRole::Name).await;
    assert_eq!(error_of(&controller, FieldRole::Name).await, None);
    assert_eq!(
        controller
            .inspect(|form| form.field(FieldRole::Name).map(|field| field.invalid))
            .await
            .flatten(),
        Some(false)
    );

    Ok(())
}

#[tokio::test]
async fn test_blur_replaces_rather_than_stacks() -> anyhow::Result<()> {
    let controller = helpers::bind(MemoryForm::contact().with_value(FieldRole::Email, "nope"));

    controller.blur(FieldRole::Email).await;
    controller.blur(FieldRole::Email).await;

    assert_eq!(controller.inspect(|form| form.errors().len()).await, Some(1));

    Ok(())
}

#[tokio::test]
async fn test_blur_on_empty_phone_clears_error() -> anyhow::Result<()> {
    let controller = helpers::bind(MemoryForm::contact().with_value(FieldRole::Phone, "12345"));

    controller.dispatch(FormEvent::Blur(FieldRole::Phone)).await;
    assert_eq!(
        error_of(&controller, FieldRole::Phone).await.as_deref(),
        Some("Please enter a valid 10-digit Indian phone number")
    );

    controller
        .update(|form| form.set_value(FieldRole::Phone, ""))
        .await;
    controller.dispatch(FormEvent::Blur(FieldRole::Phone)).await;
    assert_eq!(error_of(&controller, FieldRole::Phone).await, None);

    Ok(())
}

#[tokio::test]
async fn test_blur_on_empty_required_field_shows_error() -> anyhow::Result<()> {
    let controller = helpers::bind(MemoryForm::contact());

    controller.blur(FieldRole::Message).await;

    assert_eq!(
        error_of(&controller, FieldRole::Message).await.as_deref(),
        Some("Message must be at least 10 characters long")
    );

    Ok(())
}

#[tokio::test]
async fn test_blur_on_unbound_field_is_ignored() -> anyhow::Result<()> {
    let form = MemoryForm::new()
        .with_field(FieldRole::Name)
        .with_field(FieldRole::Email)
        .with_field(FieldRole::Message);
    let controller = helpers::bind(form);

    controller.blur(FieldRole::Phone).await;

    assert_eq!(controller.inspect(|form| form.errors().len()).await, Some(0));

    Ok(())
}
