use application::AccountApp;
use domain::{DomainError, NewUser};

/// Runs the register/login flow the mobile app exercises, without HTTP.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = AccountApp::new();
    println!("👥 Seeded users: {}", app.account_service.user_count().await?);

    let user = app
        .register(NewUser::new(
            "A",
            Some("a@x.com".to_string()),
            "p1",
            "111",
        ))
        .await?;
    println!("📝 Registered {} with id {}", user.name, user.id);

    let session = app.login("a@x.com", "p1").await?;
    println!("🔑 Logged in as {} ({})", session.name, session.id);

    match app
        .register(NewUser::new("B", Some("a@x.com".to_string()), "p2", "222"))
        .await
    {
        Err(DomainError::DuplicateEmail(email)) => println!("🚫 Duplicate email rejected: {}", email),
        other => anyhow::bail!("expected a duplicate email rejection, got {:?}", other),
    }

    match app.login("a@x.com", "wrong").await {
        Err(DomainError::InvalidCredentials) => println!("🚫 Wrong password rejected"),
        other => anyhow::bail!("expected invalid credentials, got {:?}", other),
    }

    for user in app.account_service.list_users().await? {
        println!(
            "   {} | {} | {} | {}",
            user.id,
            user.name,
            user.email.as_deref().unwrap_or("-"),
            user.phone
        );
    }

    Ok(())
}
