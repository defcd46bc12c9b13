use domain::NewUser;

/// The two accounts every fresh store starts with, in id order.
pub fn seed_users() -> Vec<NewUser> {
    vec![
        NewUser::new(
            "محمد أحمد",
            Some("test@example.com".to_string()),
            "password123",
            "0123456789",
        ),
        NewUser::new(
            "فاطمة علي",
            Some("fatima@example.com".to_string()),
            "password456",
            "0987654321",
        ),
    ]
}
